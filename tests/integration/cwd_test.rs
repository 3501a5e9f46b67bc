//! Integration tests for working-directory rendering (CLI)
//!
//! All of these use the plain shell style so the expected strings are
//! just text and divider glyphs. Prompts run inside a fresh tempdir
//! acting as the home directory: writable, no virtualenv, no git.

use std::fs;
use std::path::Path;

use crate::helpers::{home_tmp, render_prompt};

#[test]
fn home_directory_renders_as_tilde() {
    let (_tmp, home) = home_tmp();
    let stdout = render_prompt(&["--shell", "plain"], &home, &home);
    assert_eq!(stdout, " ~ \u{e0b0} $ \u{e0b0}");
}

#[test]
fn home_child_keeps_its_full_name() {
    let (_tmp, home) = home_tmp();
    let dir = home.join("Go");
    fs::create_dir(&dir).unwrap();
    let stdout = render_prompt(&["--shell", "plain"], &home, &dir);
    assert_eq!(stdout, " ~ \u{e0b0} Go \u{e0b0} $ \u{e0b0}");
}

#[test]
fn home_depth_two_uses_the_thin_divider() {
    let (_tmp, home) = home_tmp();
    let dir = home.join("Go").join("src");
    fs::create_dir_all(&dir).unwrap();
    let stdout = render_prompt(&["--shell", "plain"], &home, &dir);
    assert_eq!(stdout, " ~ \u{e0b0} Go \u{e0b1} src \u{e0b0} $ \u{e0b0}");
}

#[test]
fn deep_home_path_collapses_to_an_ellipsis() {
    let (_tmp, home) = home_tmp();
    let dir = home
        .join("Go")
        .join("src")
        .join("github.com")
        .join("org")
        .join("project");
    fs::create_dir_all(&dir).unwrap();
    let stdout = render_prompt(&["--shell", "plain"], &home, &dir);
    assert_eq!(stdout, " ~ \u{e0b0} Go \u{e0b1} \u{2026} \u{e0b1} project \u{e0b0} $ \u{e0b0}");
}

#[test]
fn filesystem_root_renders_a_slash_block() {
    let (_tmp, home) = home_tmp();
    let stdout = render_prompt(&["--shell", "plain"], &home, Path::new("/"));
    // Writability and repository state of / vary by machine; the root
    // block itself must lead the line either way.
    assert!(stdout.starts_with(" / \u{e0b0}"), "got: {:?}", stdout);
}

#[test]
fn path_outside_home_stays_absolute() {
    let (_tmp, root) = home_tmp();
    let home = root.join("alice");
    let sibling = root.join("alicesmith");
    fs::create_dir(&home).unwrap();
    fs::create_dir(&sibling).unwrap();
    let stdout = render_prompt(&["--shell", "plain"], &home, &sibling);
    assert!(stdout.contains(" alicesmith "), "got: {:?}", stdout);
    assert!(!stdout.contains('~'), "got: {:?}", stdout);
}
