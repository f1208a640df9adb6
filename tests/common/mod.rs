#![allow(dead_code)]
use assert_fs::TempDir;
use std::fs;
use std::path::Path;

pub fn write(
    root: &Path,
    rel: &str,
    contents: &str,
) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Builds a fixture monorepo:
/// root/
///   package.json, project_docs.txt, .env
///   packages/backend/package.json
///   packages/backend/prisma/schema.prisma
///   packages/backend/src/index.ts
///   packages/backend/src/routes/userRoutes.ts
///   packages/backend/src/README.MD
///   packages/backend/src/package-lock.json          (ignored name)
///   packages/backend/src/server.log                 (not allow-listed)
///   packages/backend/src/node_modules/dep/index.js  (pruned)
///   packages/backend/src/dist/bundle.js             (pruned)
///   packages/customer-frontend/src/App.tsx
///   packages/customer-frontend/src/styles.css
/// There is no admin-frontend package.
pub fn project_fs() -> TempDir {
    let td = TempDir::new().unwrap();
    let root = td.path();

    write(root, "package.json", "{ \"name\": \"shop\" }\n");
    write(root, "project_docs.txt", "Shop monorepo.\n");
    write(root, ".env", "DATABASE_URL=postgres://secret\n");

    write(root, "packages/backend/package.json", "{ \"name\": \"backend\" }\n");
    write(
        root,
        "packages/backend/prisma/schema.prisma",
        "model User {\n  id Int @id\n}\n",
    );
    write(root, "packages/backend/src/index.ts", "  export const x = 1;\n\n");
    write(
        root,
        "packages/backend/src/routes/userRoutes.ts",
        "export const userRoutes = [];\n",
    );
    write(root, "packages/backend/src/README.MD", "# Backend\n");
    write(
        root,
        "packages/backend/src/package-lock.json",
        "{ \"lockfileVersion\": 3 }\n",
    );
    write(root, "packages/backend/src/server.log", "GET / 200\n");
    write(
        root,
        "packages/backend/src/node_modules/dep/index.js",
        "module.exports = 'dep';\n",
    );
    write(root, "packages/backend/src/dist/bundle.js", "var bundled = 1;\n");

    write(
        root,
        "packages/customer-frontend/src/App.tsx",
        "export default function App() { return null; }\n",
    );
    write(
        root,
        "packages/customer-frontend/src/styles.css",
        "body { margin: 0; }\n",
    );
    td
}

/// Number of emitted file blocks in a generated document.
pub fn block_count(doc: &str) -> usize {
    doc.matches("### File: `").count()
}
