use clap::{Arg, Command};
use smartlang::nmt::{HuggingFaceProvider, NeuralTranslator, Outcome, translate_with_fallback};
use smartlang::{Dictionaries, Translator};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sentences run when no text is given, from simple to more complex.
/// The later ones are outside the rule-based grammar.
const SAMPLE_SENTENCES: &[&str] = &[
    "I am happy",
    "The cat is on the table",
    "He loves his new blue car",
    "I need to speak Spanish fluently",
    "The teacher wants to go to the city",
    "The small dog runs in the park",
    "Yesterday I went to the store and bought some food",
    "I will visit Spain next summer to practice my Spanish",
    "Can you help me translate this document from English to Spanish?",
    "The weather is beautiful today, I think I will go for a walk",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("smartlang")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compiler-style English to Spanish translator")
        .arg(
            Arg::new("text")
                .help("English text to translate (runs the sample suite when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .short('d')
                .help("Directory with english_tokens.json and spanish_tokens.json")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("nmt")
                .long("nmt")
                .short('n')
                .help("Translate with the neural model, falling back to rules on failure")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("both")
                .long("both")
                .short('b')
                .help("Show neural and rule-based translations side by side")
                .action(clap::ArgAction::SetTrue)
                .conflicts_with("nmt"),
        )
        .arg(
            Arg::new("model")
                .long("model")
                .short('m')
                .help("Hugging Face model id for the neural path"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show tokens, matched pattern and per-token substitutions")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .short('j')
                .help("Print the translation result as JSON")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let data_dir = matches
        .get_one::<PathBuf>("data-dir")
        .cloned()
        .or_else(|| std::env::var_os("SMARTLANG_DATA_DIR").map(PathBuf::from));
    let dictionaries = match &data_dir {
        Some(dir) => Dictionaries::load_from_dir(dir),
        None => Dictionaries::builtin(),
    }
    .map_err(|e| {
        eprintln!("❌ Failed to load dictionaries: {}", e);
        e
    })?;
    let translator = Translator::new(dictionaries);

    let use_nmt = matches.get_flag("nmt");
    let both = matches.get_flag("both");
    let options = Options {
        verbose: matches.get_flag("verbose"),
        json: matches.get_flag("json"),
    };

    let provider = if use_nmt || both {
        let model = matches.get_one::<String>("model").map(String::as_str);
        match HuggingFaceProvider::from_env(model) {
            Ok(provider) => Some(provider),
            Err(e) => {
                eprintln!("⚠️  Neural model unavailable: {}", e);
                eprintln!("   Set HF_API_TOKEN to enable it; using rule-based translation");
                None
            }
        }
    } else {
        None
    };
    let nmt = provider.as_ref().map(|p| p as &dyn NeuralTranslator);

    let texts: Vec<&str> = match matches.get_one::<String>("text") {
        Some(text) => vec![text.as_str()],
        None => SAMPLE_SENTENCES.to_vec(),
    };

    for (i, text) in texts.iter().enumerate() {
        if texts.len() > 1 && !options.json {
            println!("\nTest {}:", i + 1);
        }
        if both {
            let neural = translate_with_fallback(&translator, nmt, text, true).await;
            print_outcome(text, &neural, &options)?;
            if !options.json {
                println!("--- Comparing with rule-based translation ---");
            }
        }
        let outcome = translate_with_fallback(&translator, nmt, text, use_nmt).await;
        print_outcome(text, &outcome, &options)?;
    }

    Ok(())
}

struct Options {
    verbose: bool,
    json: bool,
}

fn print_outcome(
    text: &str,
    outcome: &Outcome,
    options: &Options,
) -> Result<(), Box<dyn std::error::Error>> {
    if options.json {
        let value = serde_json::json!({
            "original": text,
            "model_used": outcome.model_used,
            "result": outcome.result,
            "parse_tree": outcome.analysis.tree,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("📝 Original: {}", text);
    if options.verbose {
        let tokens: Vec<String> = outcome
            .analysis
            .tokens
            .iter()
            .map(|t| t.to_string())
            .collect();
        println!("🔤 Tokens: {}", tokens.join(" "));
        if outcome.analysis.tree.valid {
            let pattern: Vec<String> = outcome
                .analysis
                .tree
                .pattern
                .iter()
                .map(|c| c.to_string())
                .collect();
            println!("🌳 Pattern: {}", pattern.join(" "));
        }
        for token in &outcome.analysis.result.tokens {
            println!(
                "   {:<12} {:<12} {}",
                token.original_value, token.translated_value, token.category
            );
        }
    }

    match (&outcome.result.translation, &outcome.result.error) {
        (Some(translation), _) => println!("🌍 Translation: {}", translation),
        (None, Some(error)) => println!("❌ Error: {}", error),
        (None, None) => println!("❌ Error: no translation"),
    }
    println!("⚙️  Model used: {}", outcome.model_used);
    if let Some(error) = &outcome.nmt_error {
        println!("   (neural path failed: {})", error);
    }
    Ok(())
}
