//! Security Logging Descriptor Tests
//!
//! `logging.xml` parsing through the public API

mod fixtures;

use dds_security_policy::security::{LoggingConfigParser, PolicyTables, PropertyCollection};
use dds_security_policy::Error;
use fixtures::test_data::write_logging_xml;
use tempfile::TempDir;

const LOGGING_PLUGIN: &str = "dds.sec.log.plugin";
const LOG_FILE: &str = "dds.sec.log.builtin.DDS_LogTopic.log_file";
const VERBOSITY: &str = "dds.sec.log.builtin.DDS_LogTopic.event_log_level";
const DISTRIBUTE_ENABLE: &str = "dds.sec.log.builtin.DDS_LogTopic.distribute";
const DISTRIBUTE_DEPTH: &str = "com.rti.serv.secure.logging.distribute.writer_history_depth";

fn parse(body: &str) -> Result<PropertyCollection, Error> {
    let dir = TempDir::new().unwrap();
    let path = write_logging_xml(dir.path(), body);
    let tables = PolicyTables::default();
    LoggingConfigParser::new(&tables).parse_file(path)
}

#[test]
fn test_logging_plugin() {
    let props = parse("").unwrap();

    assert_eq!(props.len(), 1);
    assert_eq!(props.find(LOGGING_PLUGIN), Some("builtin.DDS_LogTopic"));
}

#[test]
fn test_log_file() {
    let props = parse("<file>foo</file>").unwrap();

    assert_eq!(props.len(), 2);
    assert_eq!(props.find(LOGGING_PLUGIN), Some("builtin.DDS_LogTopic"));
    assert_eq!(props.find(LOG_FILE), Some("foo"));
}

#[test]
fn test_log_verbosity() {
    let props = parse("<verbosity>CRITICAL</verbosity>").unwrap();

    assert_eq!(props.len(), 2);
    assert_eq!(props.find(VERBOSITY), Some("CRITICAL"));
}

#[test]
fn test_log_distribute() {
    let props = parse("<distribute>true</distribute>").unwrap();

    assert_eq!(props.len(), 2);
    assert_eq!(props.find(DISTRIBUTE_ENABLE), Some("true"));
}

#[test]
fn test_log_depth() {
    let props = parse("<qos><depth>10</depth></qos>").unwrap();

    assert_eq!(props.len(), 2);
    assert_eq!(props.find(DISTRIBUTE_DEPTH), Some("10"));
}

#[test]
fn test_profile() {
    let props = parse("<qos><profile>DEFAULT</profile></qos>").unwrap();

    assert_eq!(props.len(), 2);
    assert_eq!(props.find(DISTRIBUTE_DEPTH), Some("10"));
}

#[test]
fn test_profile_sensor_data() {
    let props = parse("<qos><profile>SENSOR_DATA</profile></qos>").unwrap();
    assert_eq!(props.find(DISTRIBUTE_DEPTH), Some("5"));
}

#[test]
fn test_profile_overwrite() {
    let props = parse(
        "<qos>\n\
         \x20 <profile>DEFAULT</profile>\n\
         \x20 <depth>42</depth>\n\
         </qos>",
    )
    .unwrap();

    assert_eq!(props.len(), 2);
    assert_eq!(props.find(DISTRIBUTE_DEPTH), Some("42"));
}

#[test]
fn test_profile_invalid() {
    let err = parse("<qos><profile>INVALID_PROFILE</profile></qos>").unwrap_err();

    assert!(matches!(err, Error::UnknownQosProfile(ref name) if name == "INVALID_PROFILE"));
    assert!(err
        .to_string()
        .contains("INVALID_PROFILE is not a supported profile"));
}

#[test]
fn test_profile_invalid_leaves_target_empty() {
    let dir = TempDir::new().unwrap();
    write_logging_xml(dir.path(), "<qos><profile>INVALID_PROFILE</profile></qos>");
    let document =
        dds_security_policy::security::XmlDocument::load(dir.path().join("logging.xml")).unwrap();

    let tables = PolicyTables::default();
    let mut target = PropertyCollection::new();
    let result = LoggingConfigParser::new(&tables).parse_into(&document, &mut target);

    assert!(result.is_err());
    assert!(target.is_empty());
}

#[test]
fn test_empty_fields_are_malformed() {
    for field in ["file", "verbosity", "distribute"] {
        let err = parse(&format!("<{0}></{0}>", field)).unwrap_err();
        assert!(
            matches!(err, Error::MalformedField(ref f) if f == field),
            "field {}: {:?}",
            field,
            err
        );
    }

    let err = parse("<qos><depth/></qos>").unwrap_err();
    assert!(matches!(err, Error::MalformedField(ref f) if f == "depth"));
}

#[test]
fn test_missing_security_log_root() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logging.xml");
    std::fs::write(&path, "<logging><file>foo</file></logging>").unwrap();

    let tables = PolicyTables::default();
    let err = LoggingConfigParser::new(&tables).parse_file(&path).unwrap_err();
    assert!(matches!(err, Error::MalformedLoggingDescriptor(_)));
}

#[test]
fn test_unreadable_descriptor_is_io_error() {
    let dir = TempDir::new().unwrap();
    let tables = PolicyTables::default();

    let err = LoggingConfigParser::new(&tables)
        .parse_file(dir.path().join("absent.xml"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_parse_is_idempotent() {
    let body = "<file>foo</file><qos><profile>PARAMETERS</profile></qos>";
    let first = parse(body).unwrap();
    let second = parse(body).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.into_vec(), second.into_vec());
}

#[test]
fn test_all() {
    let props = parse(
        "<file>foo</file>\n\
         <verbosity>CRITICAL</verbosity>\n\
         <distribute>true</distribute>\n\
         <qos>\n\
         \x20 <depth>10</depth>\n\
         </qos>",
    )
    .unwrap();

    let listed: Vec<(&str, &str)> = props
        .iter()
        .map(|p| (p.name.as_str(), p.value.as_str()))
        .collect();
    assert_eq!(
        listed,
        vec![
            (LOGGING_PLUGIN, "builtin.DDS_LogTopic"),
            (LOG_FILE, "foo"),
            (VERBOSITY, "CRITICAL"),
            (DISTRIBUTE_ENABLE, "true"),
            (DISTRIBUTE_DEPTH, "10"),
        ]
    );
}
