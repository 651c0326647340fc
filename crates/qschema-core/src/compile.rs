use crate::{
    config::CompileConfig,
    emit::{EmitOptions, render_schema, render_table},
    error::SchemaError,
    graph::order_tables,
    model::{QualifiedName, TableDescriptor, build_table, resolve_table_name},
    node::RecordDescriptor,
    trace::{SchemaTraceEvent, SchemaTraceSink},
};

///
/// SchemaCompiler
///
/// Stateless apart from its configuration; every call recomputes all
/// descriptors from record metadata.
///

#[derive(Clone, Default)]
pub struct SchemaCompiler<'a> {
    config: CompileConfig,
    trace: Option<&'a dyn SchemaTraceSink>,
}

impl<'a> SchemaCompiler<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_config(config: CompileConfig) -> Self {
        Self {
            config,
            trace: None,
        }
    }

    #[must_use]
    pub fn trace(mut self, sink: &'a dyn SchemaTraceSink) -> Self {
        self.trace = Some(sink);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Qualified table name of a record, e.g. `.u.nsTable`.
    pub fn table_name(&self, record: &RecordDescriptor) -> Result<QualifiedName, SchemaError> {
        self.traced(resolve_table_name(record, &self.config))
    }

    /// Full table descriptor of a record.
    pub fn table(&self, record: &RecordDescriptor) -> Result<TableDescriptor, SchemaError> {
        let table = self.traced(build_table(record, &self.config))?;

        self.emit(|| SchemaTraceEvent::TableResolved {
            record: record.ident,
            table: table.name.to_string(),
            key_columns: table.key_columns.len(),
            value_columns: table.value_columns.len(),
        });

        Ok(table)
    }

    /// Tables for all records, in dependency order.
    ///
    /// Passing the same descriptor more than once is idempotent.
    pub fn order(
        &self,
        records: &[&RecordDescriptor],
    ) -> Result<Vec<TableDescriptor>, SchemaError> {
        let mut unique: Vec<&RecordDescriptor> = Vec::with_capacity(records.len());
        for &record in records {
            if !unique.iter().any(|seen| std::ptr::eq(*seen, record)) {
                unique.push(record);
            }
        }

        let tables = unique
            .into_iter()
            .map(|record| self.table(record))
            .collect::<Result<Vec<_>, _>>()?;

        let ordered = self.traced(order_tables(tables))?;

        self.emit(|| SchemaTraceEvent::SchemaOrdered {
            tables: ordered.iter().map(|t| t.name.to_string()).collect(),
        });

        Ok(ordered)
    }

    /// Render the declaration of a single empty table.
    pub fn declare_table(&self, record: &RecordDescriptor) -> Result<String, SchemaError> {
        let table = self.table(record)?;

        Ok(render_table(&table, self.emit_options()))
    }

    /// Render a newline-terminated script declaring every table in dependency order.
    pub fn declare_schema(
        &self,
        records: &[&RecordDescriptor],
    ) -> Result<String, SchemaError> {
        let tables = self.order(records)?;

        Ok(render_schema(&tables, self.emit_options()))
    }

    const fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            unique_attribute: self.config.unique_attribute,
        }
    }

    fn emit(&self, event: impl FnOnce() -> SchemaTraceEvent) {
        if let Some(sink) = self.trace {
            sink.on_event(event());
        }
    }

    fn traced<T>(&self, result: Result<T, SchemaError>) -> Result<T, SchemaError> {
        if let Err(err) = &result {
            self.emit(|| SchemaTraceEvent::CompileFailed {
                kind: err.kind(),
                message: err.to_string(),
            });
        }

        result
    }
}

///
/// TESTS
///
