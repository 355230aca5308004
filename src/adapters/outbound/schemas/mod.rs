/// Schema corpus adapters implementing the SchemaRepository port
mod caching_schema_repository;
mod directory_schema_repository;
mod embedded_schema_repository;
mod in_memory_schema_repository;

pub use caching_schema_repository::CachingSchemaRepository;
pub use directory_schema_repository::DirectorySchemaRepository;
pub use embedded_schema_repository::EmbeddedSchemaRepository;
pub use in_memory_schema_repository::InMemorySchemaRepository;

use crate::sbom_validation::domain::Dialect;

/// Versions of the `dialect` schemas among `file_names`, in ascending
/// numeric order (`1.10` sorts after `1.9`).
fn versions_in<'a>(dialect: Dialect, file_names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut versions: Vec<String> = file_names
        .filter_map(|name| dialect.version_from_file_name(name))
        .map(str::to_string)
        .collect();
    versions.sort_by_cached_key(|version| version_sort_key(version));
    versions.dedup();
    versions
}

fn version_sort_key(version: &str) -> Vec<(u64, String)> {
    version
        .split(['.', '-'])
        .map(|part| match part.parse::<u64>() {
            Ok(number) => (number, String::new()),
            Err(_) => (u64::MAX, part.to_string()),
        })
        .collect()
}
