//! Request Contract
//!
//! Range and ratio checks a caller applies before handing parameters to
//! the engine. The engine itself only insists on a positive iteration
//! count; these bounds keep homes from crowding and degree targets
//! reachable.

use thiserror::Error;

use crate::params::SimulationParameters;

#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("nodes must be at least thrice the amount of cats")]
    TooManyCats,

    #[error("the mean of edges cannot be more than half the amount of nodes")]
    TooManyEdges,

    #[error("the variance of edges cannot be more than a third of the mean")]
    EdgeVarianceTooLarge,
}

fn within(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), RequestError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(RequestError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}

/// Check every bound, reporting the first violation
pub fn check_contract(params: &SimulationParameters) -> Result<(), RequestError> {
    within("iterations", f64::from(params.iterations()), 1.0, 10_000.0)?;
    within("cat_amount", params.cat_amount as f64, 2.0, 200.0)?;
    within("node_amount", params.node_amount as f64, 3.0, 1000.0)?;
    within("mean_edges", params.mean_edges, 2.0, 20.0)?;
    within("var_edges", params.var_edges, 0.0, 5.0)?;
    within("mean_aggressive", params.mean_aggressive, -1.0, 1.0)?;
    within("var_aggressive", params.var_aggressive, 0.0, 0.5)?;
    within("mean_laziness", params.mean_laziness, 0.0, 1.0)?;
    within("var_laziness", params.var_laziness, 0.0, 0.25)?;

    let nodes = params.node_amount as f64;
    if params.cat_amount * 3 >= params.node_amount {
        return Err(RequestError::TooManyCats);
    }
    if params.mean_edges * 2.0 >= nodes {
        return Err(RequestError::TooManyEdges);
    }
    if params.var_edges * 3.0 >= params.mean_edges {
        return Err(RequestError::EdgeVarianceTooLarge);
    }
    Ok(())
}
