pub mod building;
pub mod error;
pub mod export;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use building::{BuildingParams, MakeBuilding};
pub use error::{BuildingError, Result};
pub use tessellation::TriangleMesh;

/// Validates `params`, builds the mesh and serializes it as an OBJ document.
///
/// # Errors
///
/// Returns an error if the parameters are out of range or serialization
/// fails.
pub fn generate_document(params: &BuildingParams) -> Result<String> {
    params.validate()?;
    let mesh = MakeBuilding::new(*params).execute();
    export::WriteObj::new(params, &mesh).execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ParameterError;

    #[test]
    fn document_for_defaults() {
        let doc = generate_document(&BuildingParams::default()).unwrap();
        assert!(doc.starts_with("# building-mesh\n# sides: 8\n"));
        assert_eq!(doc.lines().filter(|l| l.starts_with("f ")).count(), 32);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let result = generate_document(&BuildingParams::new(2, 1.0, 1.0, 1.0));
        assert!(matches!(
            result,
            Err(BuildingError::Parameter(ParameterError::SidesOutOfRange { .. }))
        ));
    }

    #[test]
    fn identical_params_give_identical_documents() {
        let params = BuildingParams::new(23, 7.0, 2.5, 1.0);
        assert_eq!(
            generate_document(&params).unwrap(),
            generate_document(&params).unwrap()
        );
    }
}
