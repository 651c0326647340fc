use convert_case::{Case, Casing};
use darling::FromField;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, Ident, Path, PathArguments, Type, ext::IdentExt};

///
/// FieldArgs
///

#[derive(Debug, FromField)]
#[darling(attributes(qschema))]
pub struct FieldArgs {
    ident: Option<Ident>,
    ty: Type,

    /// Declared name override; camel-cased by the compiler like any other.
    /// Use it to keep inner capitals in snake_case idents, which are split
    /// into words (`iso_URL` declares `IsoUrl`).
    #[darling(default)]
    rename: Option<String>,

    #[darling(default)]
    key: bool,

    #[darling(default)]
    unique: bool,

    #[darling(default)]
    sorted: bool,

    #[darling(default)]
    parted: bool,

    #[darling(default)]
    grouped: bool,

    #[darling(default)]
    foreign_key: Option<Path>,

    #[darling(default)]
    date: bool,

    #[darling(default)]
    time: bool,

    #[darling(default)]
    string: bool,
}

impl FieldArgs {
    // declared name: idents with underscores are PascalCased word by word,
    // anything else is passed through so its inner casing survives
    fn declared_name(&self) -> String {
        if let Some(rename) = &self.rename {
            return rename.clone();
        }

        let Some(ident) = &self.ident else {
            return String::new();
        };
        let ident = ident.unraw().to_string();

        if ident.contains('_') {
            ident.to_case(Case::Pascal)
        } else {
            ident
        }
    }

    fn modifiers(&self) -> Vec<TokenStream> {
        let flags = [
            (self.key, quote!(Key)),
            (self.unique, quote!(Unique)),
            (self.sorted, quote!(Sorted)),
            (self.parted, quote!(Parted)),
            (self.grouped, quote!(Grouped)),
        ];

        let mut modifiers: Vec<TokenStream> = flags
            .into_iter()
            .filter(|(set, _)| *set)
            .map(|(_, variant)| quote!(::qschema::node::Modifier::#variant))
            .collect();

        if let Some(target) = &self.foreign_key {
            modifiers.push(quote! {
                ::qschema::node::Modifier::ForeignKey(
                    ::qschema::node::RecordRef(<#target as ::qschema::node::Record>::descriptor)
                )
            });
        }

        let overrides = [
            (self.date, quote!(DateOverride)),
            (self.time, quote!(TimeOverride)),
            (self.string, quote!(StringOverride)),
        ];
        modifiers.extend(
            overrides
                .into_iter()
                .filter(|(set, _)| *set)
                .map(|(_, variant)| quote!(::qschema::node::Modifier::#variant)),
        );

        modifiers
    }

    /// Tokens for the field's `FieldDescriptor` literal.
    pub fn schema_part(&self) -> TokenStream {
        let ident = self.declared_name();
        let (optional, kind) = classify(&self.ty);
        let value = match kind {
            FieldKind::Primitive(variant) => {
                let variant = quote::format_ident!("{variant}");
                quote!(::qschema::node::FieldType::Primitive(::qschema::types::Primitive::#variant))
            }
            FieldKind::Unsupported(name) => quote!(::qschema::node::FieldType::Unsupported(#name)),
        };
        let modifiers = self.modifiers();

        quote! {
            ::qschema::node::FieldDescriptor {
                ident: #ident,
                value: #value,
                optional: #optional,
                modifiers: &[#(#modifiers),*],
            }
        }
    }
}

///
/// FieldKind
///

#[derive(Debug, Eq, PartialEq)]
enum FieldKind {
    Primitive(&'static str),
    Unsupported(String),
}

// Classify a Rust type into (optional, kind); Option<T> unwraps to T.
fn classify(ty: &Type) -> (bool, FieldKind) {
    match ty {
        Type::Reference(r) => classify(&r.elem),
        Type::Group(g) => classify(&g.elem),
        Type::Paren(p) => classify(&p.elem),
        Type::Path(p) if p.qself.is_none() => {
            let Some(last) = p.path.segments.last() else {
                return (false, unsupported(ty));
            };

            if last.ident == "Option" {
                return match single_type_arg(&last.arguments) {
                    Some(inner) => (true, classify(inner).1),
                    None => (true, unsupported(ty)),
                };
            }

            let kind = match primitive_variant(&last.ident.to_string()) {
                Some(variant) if last.arguments.is_none() => FieldKind::Primitive(variant),
                _ => unsupported(ty),
            };

            (false, kind)
        }
        _ => (false, unsupported(ty)),
    }
}

fn primitive_variant(ident: &str) -> Option<&'static str> {
    let variant = match ident {
        "bool" => "Bool",
        "char" => "Char",
        "i8" | "u8" => "Int8",
        "i16" | "u16" => "Int16",
        "i32" | "u32" => "Int32",
        "i64" | "u64" | "isize" | "usize" => "Int64",
        "f32" => "Float32",
        "f64" => "Float64",
        "Decimal" => "Decimal",
        "DateTime" | "NaiveDateTime" | "OffsetDateTime" | "PrimitiveDateTime" | "SystemTime"
        | "Timestamp" => "Timestamp",
        "Duration" | "TimeDelta" => "Duration",
        "String" | "str" => "Text",
        _ => return None,
    };

    Some(variant)
}

fn single_type_arg(args: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = args else {
        return None;
    };

    match args.args.first() {
        Some(GenericArgument::Type(ty)) if args.args.len() == 1 => Some(ty),
        _ => None,
    }
}

fn unsupported(ty: &Type) -> FieldKind {
    FieldKind::Unsupported(quote!(#ty).to_string().replace(' ', ""))
}

///
/// TESTS
///
