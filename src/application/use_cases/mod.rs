/// Use cases module containing application business logic orchestration
mod validate_sbom;

pub use validate_sbom::ValidateSbomUseCase;
