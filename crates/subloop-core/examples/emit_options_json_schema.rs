use schemars::schema_for;
use subloop_core::SnippetOptions;

fn main() {
    let schema = schema_for!(SnippetOptions);
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}
