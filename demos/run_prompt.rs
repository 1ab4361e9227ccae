use dotenv::dotenv;
use goodi_cofounder::*;
use std::error::Error;
use std::io::{self, Write};

fn read_line(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn Error>> {
    dotenv().ok();

    let mut workspace = Workspace::open(FileStore::new(".goodi"))?;
    if let Ok(key) = std::env::var("GEMINI_API_KEY") {
        workspace.set_api_key(key)?;
    }

    let client = CompletionClient::new(GeminiClient::new());

    println!("💼 Goodi Co-Founder");
    println!("------------------------------------------------------------------");
    for role in VirtualRole::all() {
        println!("{:<28} {}", role.label(), role.description());
    }
    println!("------------------------------------------------------------------");

    let favorites: Vec<PromptTemplate> = workspace
        .prompts_for_role(VirtualRole::General)
        .into_iter()
        .cloned()
        .collect();
    for (i, prompt) in favorites.iter().enumerate() {
        println!("{:>2}. [{}] {}", i + 1, prompt.category, prompt.title);
    }

    let choice = read_line("\nPick a prompt number (or 'cfo' for a ledger review)")?;

    let answer = if choice.eq_ignore_ascii_case("cfo") {
        let totals = workspace.totals();
        println!(
            "\n📊 Income {:.2} € | Expenses {:.2} € | Net {:.2} €",
            totals.total_income, totals.total_expense, totals.net
        );
        client
            .financial_insight(workspace.api_key(), workspace.genome(), workspace.transactions())
            .await
    } else {
        let index: usize = choice.parse().map_err(|_| "not a number")?;
        let template = index
            .checked_sub(1)
            .and_then(|i| favorites.get(i))
            .cloned()
            .ok_or("no such prompt")?;

        let mut session = PromptSession::new(template);
        let names: Vec<String> = session.bindings().names().map(str::to_string).collect();
        for name in names {
            let value = read_line(&format!("Enter {}", name))?;
            session.set_variable(&name, value)?;
        }

        println!("\nThinking...");
        session
            .run(&client, workspace.api_key(), workspace.genome())
            .await
    };

    match answer {
        Ok(text) => println!("\n{}\n", text),
        Err(e) => eprintln!("❌ Error: {}", e),
    }

    Ok(())
}
