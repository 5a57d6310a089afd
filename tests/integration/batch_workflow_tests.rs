/*!
 * End-to-end batch conversion tests on a temporary directory tree
 */

use std::fs;
use anyhow::Result;
use log::Level;
use org2mdx::{Config, Controller, ImageRegistry};
use org2mdx::file_utils::RecordingSink;
use crate::common;

#[test]
fn test_run_withMissingSourceDir_shouldSkipWithoutWrites() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let config = common::config_in(temp_dir.path());
    let output_dir = config.output_dir.clone();

    common::take_logs(Level::Info);

    let report = Controller::with_config(config)?.run()?;

    assert_eq!(common::take_logs(Level::Info), vec!["Org directory does not exist, skipping.".to_string()]);
    assert!(report.source_missing);
    assert_eq!(report.documents_converted(), 0);
    assert!(!std::path::Path::new(&output_dir).exists());
    assert_eq!(fs::read_dir(temp_dir.path())?.count(), 0);

    Ok(())
}

#[test]
fn test_run_withPostsAndImage_shouldWriteMdxAndCopyImage() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "org/2024-01-01-sample.org", common::SAMPLE_POST)?;
    common::create_test_file(root, "org/img/diagram.png", "PNGDATA")?;
    common::create_test_file(root, "org/README.txt", "not a post")?;

    let config = common::config_in(root);
    let output_dir = config.output_dir.clone();
    common::take_logs(Level::Info);

    let report = Controller::with_config(config)?.run()?;

    assert_eq!(report.documents_converted(), 1);
    assert_eq!(report.images_registered, 1);

    assert_eq!(
        common::take_logs(Level::Info),
        vec![
            "Processing 2024-01-01-sample.org".to_string(),
            "Converted 2024-01-01-sample.org to 2024-01-01-sample.mdx".to_string(),
            "Processing README.txt".to_string(),
            "Processing img".to_string(),
            format!("Conversion complete. MDX file saved at: {}", output_dir),
        ]
    );

    let output = root.join("out/2024-01-01-sample.mdx");
    assert_eq!(report.outputs, vec![output.clone()]);

    let mdx = fs::read_to_string(&output)?;
    assert!(mdx.starts_with("---\nTITLE: Sample\nDATE: 2024-01-01\n---\nimport Image0 from "));
    assert!(mdx.contains("# Introduction\n"));

    let copied = root.join("assets/2024/sample/diagram.png");
    assert_eq!(fs::read_to_string(copied)?, "PNGDATA");
    assert!(!root.join("out/README.mdx").exists());

    Ok(())
}

#[test]
fn test_run_withTwoPosts_shouldReimportEarlierImages() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "org/2024-01-01-first.org", "[[a.png]]\n[[b.png]]")?;
    common::create_test_file(root, "org/2024-02-01-second.org", "[[c.png]]")?;

    let controller = Controller::with_config(common::config_in(root))?;
    let mut registry = ImageRegistry::new("assets");
    let mut sink = RecordingSink::default();

    let report = controller.run_with(&mut registry, &mut sink)?;

    assert_eq!(report.documents_converted(), 2);
    assert_eq!(report.images_registered, 3);
    assert_eq!(sink.copies.len(), 3);

    let second = fs::read_to_string(root.join("out/2024-02-01-second.mdx"))?;
    assert!(second.contains("import Image0 from assets/2024/first/a.png\n"));
    assert!(second.contains("import Image1 from assets/2024/first/b.png\n"));
    assert!(second.contains("import Image2 from assets/2024/second/c.png\n"));
    assert!(second.contains("src={{Image2}}"));

    Ok(())
}

#[test]
fn test_run_withMalformedPost_shouldAbortRemainingPosts() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "org/2024-01-01-broken.org", "#+BEGIN_SRC\nx\n#+END_SRC")?;
    common::create_test_file(root, "org/2024-01-02-fine.org", "fine")?;

    let result = Controller::with_config(common::config_in(root))?.run();

    assert!(result.is_err());
    assert!(!root.join("out/2024-01-02-fine.mdx").exists());

    Ok(())
}

#[test]
fn test_run_withUndatedPost_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "org/about.org", "hello")?;

    let err = Controller::with_config(common::config_in(root))?.run().unwrap_err();

    assert!(format!("{:#}", err).contains("about"));

    Ok(())
}

#[test]
fn test_run_withMissingImage_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "org/2024-01-01-post.org", "[[nowhere.png]]")?;

    let result = Controller::with_config(common::config_in(root))?.run();

    assert!(result.is_err());

    Ok(())
}

#[test]
fn test_run_withCustomExtensions_shouldRespectConfig() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "org/2024-05-05-notes.txt", "*** deep")?;
    common::create_test_file(root, "org/2024-05-06-ignored.org", "x")?;

    let config = Config {
        source_extension: "txt".to_string(),
        target_extension: "md".to_string(),
        heading_offset: 1,
        ..common::config_in(root)
    };
    let report = Controller::with_config(config)?.run()?;

    assert_eq!(report.documents_converted(), 1);
    let md = fs::read_to_string(root.join("out/2024-05-05-notes.md"))?;
    assert_eq!(md, "---\n---\n\n#### deep\n");

    Ok(())
}

#[test]
fn test_run_withCrlfPost_shouldWriteOnlyNewlines() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(
        root,
        "org/2024-01-01-windows.org",
        "#+TITLE: Hi\r\n* Head\r\n#+BEGIN_SRC rust\r\nx\r\n#+END_SRC\r\n",
    )?;

    Controller::with_config(common::config_in(root))?.run()?;

    let mdx = fs::read_to_string(root.join("out/2024-01-01-windows.mdx"))?;
    assert!(!mdx.contains('\r'));
    assert_eq!(mdx, "---\nTITLE: Hi\n---\n\n# Head\n```rust\n> x\n```\n\n");

    Ok(())
}

#[test]
fn test_run_withUppercaseExtension_shouldSkipFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "org/2024-01-01-shouting.ORG", "* loud")?;

    let report = Controller::with_config(common::config_in(root))?.run()?;

    assert_eq!(report.documents_converted(), 0);
    assert!(!root.join("out/2024-01-01-shouting.mdx").exists());

    Ok(())
}
