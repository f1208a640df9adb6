mod common;
use assert_fs::prelude::*;
use common::{block_count, project_fs};
use predicates::str::contains;
use std::fs;

#[test]
fn writes_context_for_fixed_layout() {
    let dir = project_fs();

    assert_cmd::cargo::cargo_bin_cmd!("code-context")
        .current_dir(&dir)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(contains("Processed 9 files"))
        .stdout(contains("review the generated file for any sensitive data"))
        .stderr(contains(
            "File not found, skipping: packages/customer-frontend/package.json",
        ))
        .stderr(contains(
            "Scan directory not found, skipping: packages/admin-frontend/src",
        ));

    let doc = fs::read_to_string(dir.child("code_context.md").path()).unwrap();
    assert!(doc.starts_with("# Project Code Context ("));
    assert!(doc.ends_with("---\n--- End of Context ---\n"));
    assert_eq!(block_count(&doc), 9);

    let config_section = doc.find("## Key Configuration Files").unwrap();
    let source_section = doc.find("## Source Code Files").unwrap();
    let root_pkg = doc.find("### File: `package.json`").unwrap();
    let index_ts = doc.find("### File: `packages/backend/src/index.ts`").unwrap();
    assert!(config_section < root_pkg && root_pkg < source_section);
    assert!(source_section < index_ts);

    assert!(doc.contains("```typescript\nexport const x = 1;\n```"));
    assert!(doc.contains("### File: `packages/backend/src/routes/userRoutes.ts`"));
    assert!(doc.contains("### File: `packages/backend/src/README.MD`\n\n```markdown\n"));
    assert!(doc.contains("### File: `packages/backend/prisma/schema.prisma`\n\n```prisma\n"));
    assert!(doc.contains("### File: `packages/customer-frontend/src/App.tsx`\n\n```tsx\n"));
    assert!(doc.contains("```css\nbody { margin: 0; }\n```"));
}

#[test]
fn excluded_entries_never_appear() {
    let dir = project_fs();

    assert_cmd::cargo::cargo_bin_cmd!("code-context")
        .current_dir(&dir)
        .assert()
        .success();

    let doc = fs::read_to_string(dir.child("code_context.md").path()).unwrap();
    for absent in [
        "node_modules",
        "dist/bundle.js",
        "server.log",
        "package-lock.json",
        ".env",
        "postgres://secret",
        "admin-frontend",
    ] {
        assert!(!doc.contains(absent), "{absent} leaked into output");
    }
}

#[test]
fn rerun_truncates_previous_output() {
    let dir = project_fs();

    for _ in 0..2 {
        assert_cmd::cargo::cargo_bin_cmd!("code-context")
            .current_dir(&dir)
            .assert()
            .success();
    }

    let doc = fs::read_to_string(dir.child("code_context.md").path()).unwrap();
    assert_eq!(doc.matches("# Project Code Context (").count(), 1);
    assert_eq!(block_count(&doc), 9);
    assert!(!doc.contains("code_context.md"));
}

#[test]
fn empty_directory_still_produces_document() {
    let dir = assert_fs::TempDir::new().unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("code-context")
        .current_dir(&dir)
        .assert()
        .success()
        .stdout(contains("Processed 0 files"));

    let doc = fs::read_to_string(dir.child("code_context.md").path()).unwrap();
    assert!(doc.contains("## Key Configuration Files\n\n## Source Code Files\n\n---\n--- End of Context ---\n"));
}
