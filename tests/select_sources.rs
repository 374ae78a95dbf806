use std::path::Path;

use feature_sources::{feature_sources, BuildConfig, Candidate, SelectError};

fn candidates() -> Vec<Candidate> {
    vec![
        Candidate::always("a.c"),
        Candidate::gated("WITH_FOO", "foo.c"),
        Candidate::always("b.c"),
    ]
}

#[test]
fn enabled_feature_includes_gated_source() {
    let config = BuildConfig::from_iter([("WITH_FOO", true)]);
    let out = feature_sources(&config, &candidates()).unwrap();
    let got: Vec<&Path> = out.iter().map(|r| r.path()).collect();
    assert_eq!(
        got,
        [Path::new("a.c"), Path::new("foo.c"), Path::new("b.c")]
    );
}

#[test]
fn disabled_feature_excludes_gated_source() {
    let config = BuildConfig::from_iter([("WITH_FOO", false)]);
    let out = feature_sources(&config, &candidates()).unwrap();
    let got: Vec<&Path> = out.iter().map(|r| r.path()).collect();
    assert_eq!(got, [Path::new("a.c"), Path::new("b.c")]);
}

#[test]
fn undeclared_option_halts_selection() {
    let config = BuildConfig::new();
    let err = feature_sources(&config, &[Candidate::gated("WITH_BAR", "bar.c")]).unwrap_err();
    match err {
        SelectError::MissingOption { option, path } => {
            assert_eq!(option, "WITH_BAR");
            assert_eq!(path, Path::new("bar.c"));
        }
    }
}

#[test]
fn empty_list_selects_nothing() {
    let config = BuildConfig::from_iter([("WITH_FOO", true)]);
    let out = feature_sources(&config, &[]).unwrap();
    assert!(out.is_empty());
}

#[test]
fn all_unconditional_list_is_identity() {
    let config = BuildConfig::new();
    let input = vec![
        Candidate::always("loader.c"),
        Candidate::always("console.c"),
        Candidate::always("fs.c"),
    ];
    let out = feature_sources(&config, &input).unwrap();
    let got: Vec<&Path> = out.iter().map(|r| r.path()).collect();
    let want: Vec<&Path> = input.iter().map(|c| c.path()).collect();
    assert_eq!(got, want);
}
