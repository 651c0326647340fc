//! Compilation tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect compilation results.

///
/// SchemaTraceSink
///

pub trait SchemaTraceSink: Send + Sync {
    fn on_event(&self, event: SchemaTraceEvent);
}

///
/// SchemaTraceEvent
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SchemaTraceEvent {
    /// A record was resolved into a table descriptor.
    TableResolved {
        record: &'static str,
        table: String,
        key_columns: usize,
        value_columns: usize,
    },

    /// A multi-table request was put into emission order.
    SchemaOrdered { tables: Vec<String> },

    /// A request aborted; `kind` matches `SchemaError::kind`.
    CompileFailed { kind: &'static str, message: String },
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    ///
    /// RecordingSink
    ///

    #[derive(Default)]
    pub(crate) struct RecordingSink {
        events: Mutex<Vec<SchemaTraceEvent>>,
    }

    impl RecordingSink {
        pub(crate) fn events(&self) -> Vec<SchemaTraceEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl SchemaTraceSink for RecordingSink {
        fn on_event(&self, event: SchemaTraceEvent) {
            self.events.lock().unwrap().push(event);
        }
    }
}
