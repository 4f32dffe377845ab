//! File contents shared by tests

pub const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "es2020",
    "strict": true
  }
}
"#;

pub const SOURCE_A: &str = "export const a: number = 1;\n";

pub const SOURCE_B: &str = "import { a } from './a';\nexport const b = a + 1;\n";

pub const TSC_SYNTAX_ERROR: &str = "src/a.ts(1,25): error TS1005: ';' expected.";
