//! Plot specification config: YAML schema, validation, and loading.
//!
//! - [`PlotSpec`] — the parsed YAML document describing the plot families
//! - [`validate_spec`] — structural checks returning [`ValidationError`]
//! - [`load_spec`] — read + parse + validate a spec file, mapping any
//!   failure to [`Error::Config`]
//!
//! # Example
//!
//! ```no_run
//! use refinar::config::load_spec;
//!
//! # fn main() -> refinar::Result<()> {
//! let spec = load_spec("plots.yaml")?;
//! println!("{} variables", spec.variables.len());
//! # Ok(())
//! # }
//! ```

mod schema;
mod validate;


pub use schema::{
    CorrelationOptions, CorrelationVariableSpec, DiffMode, PlotSpec, VariableSpec,
};
pub use validate::{validate_spec, ValidationError};

use std::path::Path;

use crate::error::{Error, Result};

/// Read, parse, and validate a plot spec from a YAML file.
///
/// Any I/O, parse, or validation failure is mapped to [`Error::Config`].
pub fn load_spec<P: AsRef<Path>>(path: P) -> Result<PlotSpec> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("reading {}: {}", path.display(), e)))?;
    let spec: PlotSpec = serde_yaml::from_str(&contents)
        .map_err(|e| Error::Config(format!("parsing {}: {}", path.display(), e)))?;
    validate_spec(&spec).map_err(|e| Error::Config(e.to_string()))?;
    Ok(spec)
}
