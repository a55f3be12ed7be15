use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use triage_core::facilities::{all_facilities, emergency_facilities};
use triage_core::{
    all_categories, categorize, classify_utterances, facilities_for, follow_up_for_key,
    translations, ConversationService, CoreConfig, CoreError, HealthFacility, Language,
    MemoryStore, Role, TriageLevel,
};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Multilingual symptom triage assistant CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one or more user messages as a single transcript
    Classify {
        /// User messages, in conversation order
        #[arg(required = true)]
        messages: Vec<String>,
    },
    /// Categorize a single utterance
    Categorize {
        text: String,
    },
    /// Show the follow-up question for a symptom category
    FollowUp {
        /// Category key (fever, breathing, pain, injury, child, other)
        category: String,
        /// Language code (en, lg, sw)
        #[arg(long, default_value = "en")]
        language: String,
    },
    /// List symptom categories
    Categories {
        #[arg(long, default_value = "en")]
        language: Language,
    },
    /// List health facilities
    Facilities {
        /// Only facilities with emergency services
        #[arg(long)]
        emergency: bool,
    },
    /// Start an interactive triage conversation on stdin
    Chat {
        #[arg(long, default_value = "en")]
        language: Language,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Classify { messages }) => {
            let verdict = classify_utterances(messages.iter().map(String::as_str));
            println!("Level: {}", verdict.level);
            println!("Rule: {:?}", verdict.rule);
            println!("{}", verdict.recommendation);
        }
        Some(Commands::Categorize { text }) => {
            println!("{}", categorize(&text));
        }
        Some(Commands::FollowUp { category, language }) => {
            let follow_up = follow_up_for_key(&category, &language);
            println!("{}", follow_up.question);
            for (i, option) in follow_up.options.iter().enumerate() {
                println!("  {}. {}", i + 1, option);
            }
        }
        Some(Commands::Categories { language }) => {
            for info in all_categories() {
                println!("{:<10} {}", info.key.key(), info.translations.get(language));
            }
        }
        Some(Commands::Facilities { emergency }) => {
            let facilities: Vec<&HealthFacility> = if emergency {
                emergency_facilities().collect()
            } else {
                all_facilities().iter().collect()
            };
            print_facilities(&facilities);
        }
        Some(Commands::Chat { language }) => chat(language)?,
        None => {
            println!("Use 'triage --help' for commands");
        }
    }

    Ok(())
}

fn chat(language: Language) -> anyhow::Result<()> {
    let service = ConversationService::new(
        Arc::new(MemoryStore::new()),
        Arc::new(CoreConfig::new(language, true)),
    );
    let texts = translations(language);
    let started = service.start(None, Some(language))?;
    println!("[{}]", language.native_name());
    for message in &started.messages {
        println!("{}", message.content);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let outcome = match service.send_message(started.conversation.id, Role::User, &line) {
            Ok(outcome) => outcome,
            Err(e @ (CoreError::InvalidInput(_) | CoreError::Types(_))) => {
                eprintln!("{}", e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        for reply in &outcome.system_responses {
            println!("{}", reply.content);
        }
        if let Some(follow_up) = outcome.follow_up {
            for (i, option) in follow_up.options.iter().enumerate() {
                println!("  {}. {}", i + 1, option);
            }
        }

        let level = outcome.verdict.map(|v| v.level);
        if outcome.show_facilities || level == Some(TriageLevel::Emergency) {
            println!("\n{}", texts.nearby_facilities);
            print_facilities(&facilities_for(level.unwrap_or(TriageLevel::NonUrgent)));
        }
    }

    println!("{}", texts.goodbye);
    Ok(())
}

fn print_facilities(facilities: &[&HealthFacility]) {
    for f in facilities {
        println!("{} ({})", f.name, f.facility_type);
        println!("    {}", f.address);
        if let Some(phone) = f.phone {
            println!("    {}", phone);
        }
        if let Some(hours) = f.hours {
            println!("    {}", hours);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_language_flags() {
        let cli = Cli::try_parse_from(["triage", "categories", "--language", "SW"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Categories {
                language: Language::Sw
            })
        ));
        assert!(Cli::try_parse_from(["triage", "chat", "--language", "fr"]).is_err());
    }

    #[test]
    fn classify_requires_a_message() {
        assert!(Cli::try_parse_from(["triage", "classify"]).is_err());
    }
}
