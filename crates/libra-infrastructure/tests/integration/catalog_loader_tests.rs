//! Catalog Loader Tests

use libra_domain::{Error, PermissionDefinition, RoleDefinition};
use libra_infrastructure::auth::CatalogLoader;
use libra_infrastructure::config::CatalogConfig;
use tempfile::TempDir;

const CATALOG_TOML: &str = r#"
[[permissions]]
name = "BOOK_CREATE"
method = "POST"
url = "/api/books"
description = "Create books"

[[permissions]]
name = "BOOK_READ"
method = "GET"
url = "/api/books/**"

[[permissions]]
name = "BOOK_UPDATE"
method = "PUT"
url = "/api/books/{id}"

[[permissions]]
name = "BOOK_DELETE"
method = "PUT"
url = "/api/books/{id}/delete"

[[roles]]
name = "ADMIN"
permissions = ["BOOK_CREATE", "BOOK_READ", "BOOK_UPDATE", "BOOK_DELETE"]

[[roles]]
name = "USER"
permissions = ["BOOK_READ", "BOOK_UPDATE"]
"#;

#[test]
fn test_load_toml_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, CATALOG_TOML).unwrap();

    let catalog = CatalogLoader::from_config(&CatalogConfig {
        path: Some(path),
        ..CatalogConfig::default()
    })
    .unwrap();

    assert_eq!(catalog.permission_count(), 4);
    assert!(catalog.is_allowed("USER", "/api/books/7", "PUT"));
    assert!(!catalog.is_allowed("USER", "/api/books/7/delete", "PUT"));
}

#[test]
fn test_load_json_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.JSON");
    std::fs::write(
        &path,
        r#"{"permissions":[{"name":"P","method":"get","url":"/x/**"}],
            "roles":[{"name":"R","permissions":["P"]}]}"#,
    )
    .unwrap();

    let document = CatalogLoader::load_document(&path).unwrap();
    assert_eq!(document.permissions[0].method, "get");
    assert_eq!(document.roles[0].name, "R");
}

#[test]
fn test_inline_entries_merge_with_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, CATALOG_TOML).unwrap();

    let config = CatalogConfig {
        path: Some(path),
        permissions: vec![PermissionDefinition::new(
            "AUTHOR_READ",
            "GET",
            "/api/authors/**",
            "",
        )],
        roles: vec![RoleDefinition::new(
            "LIBRARIAN",
            "",
            ["BOOK_READ", "AUTHOR_READ"],
        )],
    };
    let catalog = CatalogLoader::from_config(&config).unwrap();
    assert!(catalog.is_allowed("librarian", "/api/authors/1", "GET"));
    assert!(catalog.is_allowed("librarian", "/api/books", "GET"));
}

#[test]
fn test_invalid_documents() {
    let dir = TempDir::new().unwrap();

    let broken = dir.path().join("broken.toml");
    std::fs::write(&broken, "[[permissions]\nname = ").unwrap();
    assert!(matches!(
        CatalogLoader::load_document(&broken),
        Err(Error::Configuration { .. })
    ));

    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        CatalogLoader::load_document(&missing),
        Err(Error::Io { .. })
    ));

    let dangling = dir.path().join("dangling.toml");
    std::fs::write(
        &dangling,
        "[[roles]]\nname = \"USER\"\npermissions = [\"BOOK_READ\"]\n",
    )
    .unwrap();
    assert!(matches!(
        CatalogLoader::from_config(&CatalogConfig {
            path: Some(dangling),
            ..CatalogConfig::default()
        }),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_empty_catalog_denies_everything() {
    let catalog = CatalogLoader::from_config(&CatalogConfig::default()).unwrap();
    assert_eq!(catalog.role_count(), 0);
    assert!(!catalog.is_allowed("ADMIN", "/api/books", "GET"));
}
