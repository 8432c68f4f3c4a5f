use objexclude_commands::args::split_command;
use objexclude_commands::{parse_center, parse_polygon, CommandArgs};
use objexclude_core::CommandError;

#[test]
fn test_keys_are_case_insensitive() {
    let args = CommandArgs::parse("name=foo Center=1,2");
    assert_eq!(args.get("NAME").unwrap(), "foo");
    assert_eq!(args.get("CENTER").unwrap(), "1,2");
}

#[test]
fn test_values_keep_their_case() {
    let args = CommandArgs::parse("NAME=Tower_Left");
    assert_eq!(args.get("NAME").unwrap(), "Tower_Left");
}

#[test]
fn test_missing_parameter() {
    let args = CommandArgs::parse("CENTER=1,2");
    assert_eq!(
        args.get("NAME"),
        Err(CommandError::MissingParameter {
            param: "NAME".to_string()
        })
    );
    assert_eq!(args.get_opt("NAME"), None);
}

#[test]
fn test_split_command() {
    let (keyword, args) = split_command("exclude_object NAME=a").unwrap();
    assert_eq!(keyword, "EXCLUDE_OBJECT");
    assert_eq!(args.get("NAME").unwrap(), "a");

    let (keyword, _args) = split_command("END_CURRENT_OBJECT").unwrap();
    assert_eq!(keyword, "END_CURRENT_OBJECT");

    assert!(split_command("   ").is_none());
}

#[test]
fn test_parse_center() {
    assert_eq!(parse_center("10.5,20").unwrap(), (10.5, 20.0));
    assert_eq!(parse_center(" 1 , 2 ").unwrap(), (1.0, 2.0));
}

#[test]
fn test_parse_center_rejects_malformed() {
    assert!(matches!(
        parse_center("abc,2"),
        Err(CommandError::ParseError { .. })
    ));
    assert!(matches!(
        parse_center("1,2,3"),
        Err(CommandError::ParseError { .. })
    ));
}

#[test]
fn test_parse_polygon() {
    let outline = parse_polygon("[[0,0],[20,0],[20,20],[0,20]]").unwrap();
    assert_eq!(outline.len(), 4);
    assert_eq!(outline[2], [20.0, 20.0]);
}

#[test]
fn test_parse_polygon_rejects_malformed() {
    let err = parse_polygon("[[0,0],[20]]").unwrap_err();
    assert!(matches!(err, CommandError::ParseError { ref param, .. } if param == "POLYGON"));

    assert!(matches!(
        parse_polygon("not json"),
        Err(CommandError::ParseError { .. })
    ));
}
