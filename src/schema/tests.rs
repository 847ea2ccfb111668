//! Schema tests

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn prim(kind: PrimitiveKind) -> TypeDescriptor {
    TypeDescriptor::primitive(kind)
}

// ============================================================================
// Type Inference
// ============================================================================

#[test_case("snowflake", prim(PrimitiveKind::String) ; "snowflake is a string")]
#[test_case("string", prim(PrimitiveKind::String) ; "string")]
#[test_case("integer", prim(PrimitiveKind::Integer) ; "integer")]
#[test_case("int", prim(PrimitiveKind::Integer) ; "int")]
#[test_case("float", prim(PrimitiveKind::Float) ; "float")]
#[test_case("boolean", prim(PrimitiveKind::Boolean) ; "boolean")]
#[test_case("null", prim(PrimitiveKind::Boolean) ; "null")]
#[test_case("mixed", prim(PrimitiveKind::Dynamic) ; "mixed")]
#[test_case("integer (see below)", prim(PrimitiveKind::Integer) ; "parenthetical dropped")]
fn test_infer_primitives(raw: &str, expected: TypeDescriptor) {
    assert_eq!(infer_type(raw), expected);
}

#[test_case("array of integers", TypeDescriptor::array(prim(PrimitiveKind::Integer)) ; "array of integers")]
#[test_case("array of snowflakes", TypeDescriptor::array(prim(PrimitiveKind::String)) ; "array of snowflakes")]
#[test_case("list of strings", TypeDescriptor::array(prim(PrimitiveKind::String)) ; "list of strings")]
#[test_case("array of partial emoji objects", TypeDescriptor::array(TypeDescriptor::reference("Emoji")) ; "array of partial objects")]
#[test_case("array of two integers", TypeDescriptor::array(prim(PrimitiveKind::Integer)) ; "array with numeral count")]
fn test_infer_arrays(raw: &str, expected: TypeDescriptor) {
    assert_eq!(infer_type(raw), expected);
}

#[test_case("dictionary with keys in available locales", TypeDescriptor::StringMap ; "dictionary")]
#[test_case("one of connection object types", TypeDescriptor::one_of("ConnectionObjectTypes") ; "one of")]
#[test_case("image data", prim(PrimitiveKind::String) ; "image data")]
#[test_case("ISO8601 timestamp", prim(PrimitiveKind::Timestamp) ; "timestamp")]
#[test_case("user id", prim(PrimitiveKind::String) ; "trailing id")]
#[test_case("hex color string", prim(PrimitiveKind::String) ; "trailing string")]
fn test_infer_phrases(raw: &str, expected: TypeDescriptor) {
    assert_eq!(infer_type(raw), expected);
}

#[test_case("? partial user object", "User" ; "optional partial")]
#[test_case("partial guild member object", "GuildMember" ; "partial multi word")]
#[test_case("a role object", "Role" ; "article a")]
#[test_case("an application object", "Application" ; "article an")]
#[test_case("audit log change key", "AuditLogChangeKey" ; "plain phrase")]
#[test_case("timestamp", "Timestamp" ; "single unknown token")]
fn test_infer_record_references(raw: &str, name: &str) {
    assert_eq!(infer_type(raw), TypeDescriptor::reference(name));
}

#[test]
fn test_infer_empty_phrase_is_dynamic() {
    assert_eq!(infer_type(""), prim(PrimitiveKind::Dynamic));
    assert_eq!(infer_type("?"), prim(PrimitiveKind::Dynamic));
    assert_eq!(infer_type("(deprecated)"), prim(PrimitiveKind::Dynamic));
}

#[test]
fn test_infer_numeral_without_remainder_terminates() {
    assert_eq!(infer_type("two"), prim(PrimitiveKind::Dynamic));
}

#[test]
fn test_matching_rule_precedence() {
    let inferrer = TypeInferrer::new();
    assert_eq!(inferrer.matching_rule("snowflake"), Some("primitive"));
    assert_eq!(inferrer.matching_rule("array of strings"), Some("array"));
    assert_eq!(inferrer.matching_rule("one of x"), Some("one_of"));
    assert_eq!(inferrer.matching_rule("ISO8601 timestamp"), Some("timestamp"));
    assert_eq!(inferrer.matching_rule("three users"), Some("numeral_count"));
    assert_eq!(inferrer.matching_rule("user object"), Some("record_reference"));
}

#[test]
fn test_default_rule_order() {
    let names: Vec<_> = default_rules().iter().map(TypeRule::name).collect();
    assert_eq!(
        names,
        vec![
            "empty",
            "primitive",
            "array",
            "dictionary",
            "one_of",
            "image_data",
            "timestamp",
            "string_suffix",
            "numeral_count",
            "record_reference",
        ]
    );
}

#[test]
fn test_custom_rule_takes_precedence() {
    let inferrer = TypeInferrer::new().with_rule(TypeRule::new(
        "snowflake_as_integer",
        |p| p.first() == Some("snowflake"),
        |_, _| TypeDescriptor::primitive(PrimitiveKind::Integer),
    ));

    assert_eq!(inferrer.rules().len(), default_rules().len() + 1);
    assert_eq!(inferrer.matching_rule("snowflake"), Some("snowflake_as_integer"));
    assert_eq!(inferrer.infer("snowflake"), prim(PrimitiveKind::Integer));
    // Recursion goes through the same rule list
    assert_eq!(
        inferrer.infer("array of snowflakes"),
        TypeDescriptor::array(prim(PrimitiveKind::Integer))
    );
}

#[test]
fn test_empty_rule_list_falls_back_to_reference() {
    let inferrer = TypeInferrer::from_rules(Vec::new());
    assert_eq!(inferrer.matching_rule("user"), None);
    assert_eq!(inferrer.infer("partial user object"), TypeDescriptor::reference("User"));
}

#[test]
fn test_phrase_parse() {
    let phrase = Phrase::parse("??array of  snowflakes (max 100)");
    assert_eq!(phrase.tokens(), &["array", "of", "snowflakes"]);
    assert!(phrase.starts_with_pair("array", "of"));
    assert!(!phrase.starts_with_pair("list", "of"));
    assert_eq!(phrase.rest(2), "snowflakes");
    assert_eq!(phrase.rest(5), "");
    assert_eq!(phrase.text(), "array of snowflakes");
    assert_eq!(phrase.last(), Some("snowflakes"));
}

// ============================================================================
// Naming
// ============================================================================

#[test_case("user_id", "UserID" ; "snake with acronym")]
#[test_case("guild member", "GuildMember" ; "spaces")]
#[test_case("nsfw_level", "NSFWLevel" ; "leading acronym")]
#[test_case("avatar_url", "AvatarURL" ; "url")]
#[test_case("mfa-level", "MFALevel" ; "kebab")]
#[test_case("connection object types", "ConnectionObjectTypes" ; "union name")]
fn test_identifier(raw: &str, expected: &str) {
    assert_eq!(naming::identifier(raw), expected);
}

#[test]
fn test_canonical_word() {
    assert_eq!(naming::canonical_word("id"), "ID");
    assert_eq!(naming::canonical_word("Ids"), "IDs");
    assert_eq!(naming::canonical_word("URLS"), "URLs");
    assert_eq!(naming::canonical_word("http(s)"), "HTTP(S)");
    assert_eq!(naming::canonical_word("afk"), "AFK");
    assert_eq!(naming::canonical_word("guild"), "guild");
}

#[test]
fn test_description() {
    assert_eq!(naming::description("the user's id"), "The user's ID");
    assert_eq!(
        naming::description("`true` if the channel is nsfw"),
        "True if the channel is NSFW"
    );
    assert_eq!(naming::description("http(s) url"), "HTTP(S) URL");
    assert_eq!(naming::description(""), "");
}

#[test]
fn test_kebab() {
    assert_eq!(
        naming::kebab("Guild ResourceGuild Structure"),
        "guild-resource-guild-structure"
    );
}

#[test_case("user_id", "user_id" ; "already snake")]
#[test_case("type", "r#type" ; "keyword")]
#[test_case("self", "self_" ; "path segment keyword")]
#[test_case("1st", "_1st" ; "leading digit")]
#[test_case("", "field" ; "empty")]
fn test_field_name(raw: &str, expected: &str) {
    assert_eq!(naming::field_name(raw), expected);
}

// ============================================================================
// Types
// ============================================================================

#[test]
fn test_type_descriptor_display() {
    assert_eq!(prim(PrimitiveKind::Timestamp).to_string(), "timestamp");
    assert_eq!(
        TypeDescriptor::array(TypeDescriptor::reference("User")).to_string(),
        "array<$ref:User>"
    );
    assert_eq!(TypeDescriptor::StringMap.to_string(), "map<string,string>");
}

#[test]
fn test_type_descriptor_queries() {
    let nested = TypeDescriptor::array(TypeDescriptor::array(prim(PrimitiveKind::Timestamp)));
    assert!(nested.contains_primitive(PrimitiveKind::Timestamp));
    assert!(!nested.contains_primitive(PrimitiveKind::String));
    assert!(TypeDescriptor::array(TypeDescriptor::StringMap).contains_string_map());
    assert_eq!(TypeDescriptor::one_of("Foo").reference_name(), Some("Foo"));
    assert_eq!(TypeDescriptor::string().reference_name(), None);
}

#[test]
fn test_record_model() {
    let record = RecordModel::new(
        "Guild Member",
        "https://example.com/docs#guild-member-object",
        vec![
            Field::new("user", TypeDescriptor::reference("User"), "the user", true),
            Field::new(
                "joined_at",
                prim(PrimitiveKind::Timestamp),
                "when the user joined",
                false,
            ),
        ],
    );

    assert_eq!(record.identifier(), "GuildMember");
    assert!(record.uses_primitive(PrimitiveKind::Timestamp));
    assert!(!record.uses_string_map());
}

#[test]
fn test_field_serializes_type_key() {
    let field = Field::new("id", TypeDescriptor::string(), "the id", false);
    let json = serde_json::to_value(&field).unwrap();
    assert_eq!(json["type"], serde_json::json!({"primitive": "string"}));
    assert_eq!(json["optional"], serde_json::json!(false));
}
