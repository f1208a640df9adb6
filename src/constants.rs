// Fixed project layout & default filter lists
pub const OUTPUT_FILENAME: &str = "code_context.md";

/// Directories walked for source files, relative to the project root.
pub const SCAN_DIRECTORIES: &[&str] = &[
    "packages/backend/src",
    "packages/customer-frontend/src",
    "packages/admin-frontend/src",
];

/// Files always emitted first, in this order, when they exist.
pub const IMPORTANT_FILES: &[&str] = &[
    "project_docs.txt",
    "package.json",
    "packages/backend/package.json",
    "packages/customer-frontend/package.json",
    "packages/admin-frontend/package.json",
    "packages/backend/prisma/schema.prisma",
    "packages/backend/tsconfig.json",
    "packages/customer-frontend/tsconfig.json",
    "packages/admin-frontend/tsconfig.json",
    "packages/customer-frontend/postcss.config.js",
    "packages/admin-frontend/postcss.config.js",
];

pub const RELEVANT_EXTENSIONS: &[&str] = &[
    "ts", "tsx", "js", "jsx", "css", "json", "prisma", "md", "txt",
];

pub const IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    ".vscode",
    ".idea",
    "__pycache__",
    ".next",
    ".cache",
    "coverage",
];

pub const IGNORED_FILES: &[&str] = &[
    "package-lock.json",
    "pnpm-lock.yaml",
    ".env",
    ".DS_Store",
    OUTPUT_FILENAME,
];

pub const IGNORED_FILE_PATTERNS: &[&str] = &[
    "*.log", "*.svg", "*.png", "*.jpg", "*.jpeg", "*.gif", "*.webp", "*.ico", "*.lock",
];

/// Extension (lowercase, no dot) to fenced-block language tag.
pub const LANGUAGE_HINTS: &[(&str, &str)] = &[
    ("ts", "typescript"),
    ("tsx", "tsx"),
    ("js", "javascript"),
    ("jsx", "jsx"),
    ("json", "json"),
    ("css", "css"),
    ("html", "html"),
    ("py", "python"),
    ("prisma", "prisma"),
    ("md", "markdown"),
    ("txt", "text"),
    ("sh", "bash"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
    ("xml", "xml"),
];
