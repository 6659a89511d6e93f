//! List operation - record types of a catalog.

use eyre::{Result, WrapErr};
use structsmith_catalog::{CatalogSource, Resolver};

use crate::reports::{ListReport, RecordSummary};

/// Execute the list operation.
pub fn list<S: CatalogSource>(resolver: &mut Resolver<S>, package: &str) -> Result<ListReport> {
    let catalog = resolver
        .catalog(package)
        .wrap_err_with(|| format!("failed to load catalog for '{package}'"))?;

    let records = catalog
        .records()
        .map(|record| RecordSummary {
            fqn: record.fqn.clone(),
            fields: record.fields.len(),
            parents: record.parents.len(),
        })
        .collect();

    Ok(ListReport {
        package: catalog.name.clone(),
        version: catalog.version.clone(),
        records,
    })
}
