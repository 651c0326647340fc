use crate::{
    field::FieldArgs,
    helper::{quote_option, to_str_lit},
};
use darling::{FromDeriveInput, ast::Data, util::Override};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Generics, Ident};

///
/// RecordArgs
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(qschema), supports(struct_named))]
struct RecordArgs {
    ident: Ident,
    generics: Generics,
    data: Data<(), FieldArgs>,

    /// Explicit table name, used verbatim.
    #[darling(default)]
    table: Option<String>,

    /// `namespace` alone marks the root namespace; `namespace = "u"` sets one.
    #[darling(default)]
    namespace: Option<Override<String>>,
}

// derive_record
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let args = match RecordArgs::from_derive_input(&input) {
        Ok(args) => args,
        Err(err) => return err.write_errors(),
    };

    let fields: Vec<TokenStream> = match &args.data {
        Data::Struct(fields) => fields.fields.iter().map(FieldArgs::schema_part).collect(),
        Data::Enum(_) => Vec::new(),
    };

    let ident = &args.ident;
    let ident_str = ident.to_string();
    let table = quote_option(args.table.as_deref(), to_str_lit);
    let namespace = quote_option(args.namespace.as_ref(), |ns| match ns {
        Override::Inherit => quote!(""),
        Override::Explicit(ns) => to_str_lit(ns),
    });
    let (impl_generics, ty_generics, where_clause) = args.generics.split_for_impl();

    quote! {
        impl #impl_generics ::qschema::node::Record for #ident #ty_generics #where_clause {
            fn descriptor() -> &'static ::qschema::node::RecordDescriptor {
                static DESCRIPTOR: ::qschema::node::RecordDescriptor =
                    ::qschema::node::RecordDescriptor {
                        ident: #ident_str,
                        table_name: #table,
                        namespace: #namespace,
                        fields: &[#(#fields),*],
                    };

                &DESCRIPTOR
            }
        }
    }
}
