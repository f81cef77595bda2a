use std::fs;
use std::path::Path;

use strand::Error;
use strand::bundle::{bundle_order, write_bundle};

fn write(root: &Path, rel: &str, contents: &str) {
    fs::write(root.join(rel), contents).expect("write fixture");
}

fn id(root: &Path, rel: &str) -> String {
    fs::canonicalize(root.join(rel))
        .expect("canonicalize fixture")
        .to_string_lossy()
        .into_owned()
}

#[test]
fn dependencies_precede_their_dependents() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let root = tmp.path();
    write(root, "main.js", "require 'lib.js' require 'util.js'\n");
    write(root, "util.js", "require 'lib.js'\n");
    write(root, "lib.js", "// leaf\n");
    write(root, "standalone.js", "// no relations\n");

    let order = bundle_order(root).expect("bundle order");

    assert_eq!(
        order,
        vec![
            id(root, "lib.js"),
            id(root, "standalone.js"),
            id(root, "util.js"),
            id(root, "main.js"),
        ]
    );
}

#[test]
fn write_bundle_concatenates_contents_in_order() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let root = tmp.path();
    write(root, "b.js", "require 'a.js'\nbody of b\n");
    write(root, "a.js", "body of a\n");

    let mut out: Vec<u8> = Vec::new();
    let order = write_bundle(root, &mut out).expect("write bundle");

    assert_eq!(order, vec![id(root, "a.js"), id(root, "b.js")]);
    assert_eq!(
        String::from_utf8(out).expect("utf8 bundle"),
        "body of a\nrequire 'a.js'\nbody of b\n"
    );
}

#[test]
fn empty_root_bundles_to_nothing() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let mut out: Vec<u8> = Vec::new();
    let order = write_bundle(tmp.path(), &mut out).expect("write bundle");

    assert_eq!(order, Vec::<String>::new());
    assert!(out.is_empty());
}

#[test]
fn a_require_cycle_is_reported_with_its_chain() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let root = tmp.path();
    write(root, "a.js", "require 'b.js'\n");
    write(root, "b.js", "require 'c.js'\n");
    write(root, "c.js", "require 'a.js'\n");

    let err = bundle_order(root).expect_err("must report the cycle");
    let Error::DependencyCycle { chain } = &err else {
        panic!("unexpected error {err}");
    };
    assert_eq!(chain.len(), 3);
    for rel in ["a.js", "b.js", "c.js"] {
        assert!(chain.contains(&id(root, rel)), "{rel} missing from {chain:?}");
    }

    let rendered = err.to_string();
    assert!(rendered.starts_with("dependency cycle: "), "{rendered}");
    assert_eq!(rendered.matches(" -> ").count(), 2, "{rendered}");
}

#[test]
fn a_self_require_is_a_singleton_cycle() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let root = tmp.path();
    write(root, "a.js", "require 'a.js'\n");

    let err = bundle_order(root).expect_err("must report the cycle");
    let Error::DependencyCycle { chain } = &err else {
        panic!("unexpected error {err}");
    };
    assert_eq!(chain, &vec![id(root, "a.js")]);
}
