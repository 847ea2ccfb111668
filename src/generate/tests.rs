//! Pipeline tests

use super::*;
use crate::config::Config;
use crate::fetch::SourceDocument;
use crate::render::{GoRenderer, RustRenderer};
use crate::schema::{PrimitiveKind, TypeDescriptor, TypeRule};
use crate::store::DocStore;
use crate::types::Target;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const GUILD_URL: &str = "https://discord.com/developers/docs/resources/guild";

const GUILD_MD: &str = "
# Guild Resource

### Guild Object

###### Guild Structure

| Field | Type | Description |
|---|---|---|
| id | snowflake | guild id |
| name | string | guild name (2-100 characters) |
| owner? | boolean | true if [the user](#DOCS_RESOURCES_USER/user-object) is the owner |
| region? | ?string | deprecated voice region id for the guild |
| afk_timeout | integer | afk timeout in seconds |
| roles | array of [role](#DOCS_TOPICS_PERMISSIONS/role-object) objects | roles in the guild |
| joined_at? | ISO8601 timestamp | when this guild was joined at |

### Guild Member Object

###### Guild Member Structure

| Field | Type | Description |
|---|---|---|
| user? | [user](#DOCS_RESOURCES_USER/user-object) object | the user this guild member represents |
| nick? | ?string | this user's guild nickname |
";

fn guild_text() -> String {
    format!("{GUILD_URL}\n{GUILD_MD}")
}

#[test]
fn test_parse_document_records() {
    let records = parse_document(&guild_text());
    assert_eq!(records.len(), 2);

    let guild = &records[0];
    assert_eq!(guild.name, "Guild");
    assert_eq!(guild.source_url, format!("{GUILD_URL}#guild-object-guild-structure"));
    let names: Vec<_> = guild.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["id", "name", "owner", "afk_timeout", "roles", "joined_at"]
    );
    assert_eq!(
        guild.fields[4].field_type,
        TypeDescriptor::array(TypeDescriptor::reference("Role"))
    );
    assert_eq!(
        guild.fields[5].field_type,
        TypeDescriptor::primitive(PrimitiveKind::Timestamp)
    );

    let member = &records[1];
    assert_eq!(member.identifier(), "GuildMember");
    assert_eq!(member.fields[0].field_type, TypeDescriptor::reference("User"));
}

#[test]
fn test_parse_document_with_custom_rule() {
    let snowflake = TypeRule::new(
        "snowflake_int",
        |p| p.first() == Some("snowflake"),
        |_, _| TypeDescriptor::primitive(PrimitiveKind::Integer),
    );
    let inferrer = TypeInferrer::new().with_rule(snowflake);

    let records = parse_document_with(&guild_text(), &inferrer);
    assert_eq!(
        records[0].fields[0].field_type,
        TypeDescriptor::primitive(PrimitiveKind::Integer)
    );
}

#[test]
fn test_render_document_go() {
    let out = render_document(&guild_text(), &GoRenderer, "eventide").unwrap();

    assert!(out.starts_with("package eventide\n\nimport (\n\t\"time\"\n)\n"));
    assert!(out.contains("type Guild struct {"));
    assert!(out.contains("\t// Guild ID\n\tID string `json:\"id\"`\n"));
    assert!(out.contains("\tAFKTimeout int `json:\"afk_timeout\"`\n"));
    assert!(out.contains("\tRoles []*Role `json:\"roles\"`\n"));
    assert!(out.contains("\tOwner bool `json:\"owner,omitempty\"`\n"));
    assert!(out.contains("\tUser *User `json:\"user,omitempty\"`\n"));
    assert!(!out.contains("region"));
}

#[test]
fn test_render_document_rust() {
    let out = render_document(&guild_text(), &RustRenderer, "eventide").unwrap();

    assert!(out.contains("use chrono::{DateTime, Utc};"));
    assert!(out.contains("pub struct GuildMember {"));
    assert!(out.contains("pub roles: Vec<Role>,"));
    assert!(out.contains("pub nick: Option<String>,"));
}

#[test]
fn test_render_document_without_records() {
    assert_eq!(
        render_document(&format!("{GUILD_URL}\n# Intro\n\nProse only."), &GoRenderer, "eventide"),
        None
    );
    assert_eq!(render_document("", &GoRenderer, "eventide"), None);
}

#[test]
fn test_render_document_is_deterministic() {
    let text = guild_text();
    assert_eq!(
        render_document(&text, &GoRenderer, "eventide"),
        render_document(&text, &GoRenderer, "eventide")
    );
}

// ============================================================================
// Generator
// ============================================================================

fn seeded_store(dir: &TempDir, output_dir: &'static str) -> DocStore {
    let store = DocStore::new(dir.path().join("out"), output_dir);
    store.ensure_layout().unwrap();
    store.reset_markdown().unwrap();
    store
        .write_markdown(&SourceDocument::new("Guild.md", GUILD_URL, GUILD_MD))
        .unwrap();
    store
        .write_markdown(&SourceDocument::new(
            "Intro.md",
            "https://discord.com/developers/docs/intro",
            "# Intro\n\nNothing to see.",
        ))
        .unwrap();
    store
}

#[test]
fn test_generator_writes_go_files() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir, "go");
    let generator = Generator::new(store.clone(), Box::new(GoRenderer), "eventide");

    let report = generator.run().unwrap();

    assert_eq!(report.skipped, vec!["Intro.md"]);
    assert_eq!(
        report.generated,
        vec![GeneratedFile {
            source: "Guild.md".to_string(),
            output: "guild.go".to_string(),
            records: 2,
        }]
    );
    assert_eq!(report.total_records(), 2);

    let written = std::fs::read_to_string(store.output_dir().join("guild.go")).unwrap();
    assert_eq!(
        Some(written),
        render_document(&guild_text(), &GoRenderer, "eventide")
    );
    assert!(!store.output_dir().join("intro.go").exists());
}

#[test]
fn test_generator_from_config_uses_target() {
    let dir = TempDir::new().unwrap();
    seeded_store(&dir, "rust");

    let config = Config {
        out_dir: dir.path().join("out"),
        target: Target::Rust,
        package: "discord".to_string(),
        ..Config::default()
    };
    let generator = Generator::from_config(&config);
    assert_eq!(generator.renderer().target(), Target::Rust);

    let report = generator.run().unwrap();
    assert_eq!(report.generated[0].output, "guild.rs");

    let written =
        std::fs::read_to_string(generator.store().output_dir().join("guild.rs")).unwrap();
    assert!(written.starts_with("//! `discord` API types\n"));
}

#[test]
fn test_generator_with_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = DocStore::new(dir.path().join("out"), "go");
    let report = Generator::new(store, Box::new(GoRenderer), "eventide")
        .run()
        .unwrap();
    assert_eq!(report, GenerateReport::default());
}
