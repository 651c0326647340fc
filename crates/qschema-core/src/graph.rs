//! Foreign-key dependency ordering.
//!
//! Referenced tables are emitted before the tables that reference them.
//! The order depends only on the set of tables, never on the order they
//! were supplied in: roots are visited by qualified name and dependencies
//! in column order.

use crate::{
    error::SchemaError,
    model::{QualifiedName, TableDescriptor},
};
use std::collections::BTreeMap;

///
/// Mark
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Mark {
    White,
    Grey,
    Black,
}

///
/// SchemaGraph
///

#[derive(Debug)]
pub struct SchemaGraph {
    // sorted by qualified name
    tables: Vec<TableDescriptor>,
    edges: Vec<Vec<usize>>,
}

impl SchemaGraph {
    /// Build the graph; references to tables outside the set carry no edge.
    pub fn new(tables: Vec<TableDescriptor>) -> Result<Self, SchemaError> {
        let mut by_name: BTreeMap<QualifiedName, TableDescriptor> = BTreeMap::new();

        for table in tables {
            if let Some(prev) = by_name.get(&table.name) {
                return Err(SchemaError::DuplicateTable {
                    name: table.name.to_string(),
                    first: prev.record.to_string(),
                    second: table.record.to_string(),
                });
            }
            by_name.insert(table.name.clone(), table);
        }

        let index: BTreeMap<&QualifiedName, usize> =
            by_name.keys().enumerate().map(|(i, name)| (name, i)).collect();

        let edges = by_name
            .values()
            .map(|table| {
                let mut deps = Vec::new();
                for target in table.references() {
                    if let Some(&i) = index.get(target)
                        && !deps.contains(&i)
                    {
                        deps.push(i);
                    }
                }
                deps
            })
            .collect();

        Ok(Self {
            tables: by_name.into_values().collect(),
            edges,
        })
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Direct dependencies of a table, by qualified name.
    #[must_use]
    pub fn dependencies(&self, name: &QualifiedName) -> Vec<&QualifiedName> {
        self.tables
            .iter()
            .position(|t| &t.name == name)
            .map(|i| self.edges[i].iter().map(|&j| &self.tables[j].name).collect())
            .unwrap_or_default()
    }

    /// Consume the graph and return its tables in emission order.
    pub fn into_ordered(self) -> Result<Vec<TableDescriptor>, SchemaError> {
        let mut marks = vec![Mark::White; self.tables.len()];
        let mut path = Vec::new();
        let mut order = Vec::with_capacity(self.tables.len());

        for root in 0..self.tables.len() {
            self.visit(root, &mut marks, &mut path, &mut order)?;
        }

        let mut slots: Vec<Option<TableDescriptor>> = self.tables.into_iter().map(Some).collect();

        Ok(order.into_iter().filter_map(|i| slots[i].take()).collect())
    }

    fn visit(
        &self,
        node: usize,
        marks: &mut [Mark],
        path: &mut Vec<usize>,
        order: &mut Vec<usize>,
    ) -> Result<(), SchemaError> {
        match marks[node] {
            Mark::Black => return Ok(()),
            Mark::Grey => return Err(self.cycle_error(node, path)),
            Mark::White => {}
        }

        marks[node] = Mark::Grey;
        path.push(node);

        for &dep in &self.edges[node] {
            self.visit(dep, marks, path, order)?;
        }

        path.pop();
        marks[node] = Mark::Black;
        order.push(node);

        Ok(())
    }

    // the cycle is the tail of the current path starting at the re-entered node
    fn cycle_error(&self, node: usize, path: &[usize]) -> SchemaError {
        let start = path.iter().position(|&n| n == node).unwrap_or(0);

        let cycle = path[start..]
            .iter()
            .chain(std::iter::once(&node))
            .map(|&i| self.tables[i].name.to_string())
            .collect();

        SchemaError::CyclicSchema { cycle }
    }
}

/// Order tables so that every referenced table precedes its referencers.
pub fn order_tables(tables: Vec<TableDescriptor>) -> Result<Vec<TableDescriptor>, SchemaError> {
    SchemaGraph::new(tables)?.into_ordered()
}

///
/// TESTS
///
