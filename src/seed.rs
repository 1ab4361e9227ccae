//! Built-in starting data used for fresh installs and for fields missing from
//! an older stored document.

use crate::schema::{
    BusinessProfile, Product, ProductType, PromptTemplate, Transaction, TransactionKind,
    TransactionStatus,
};
use chrono::NaiveDate;

pub fn default_genome() -> BusinessProfile {
    BusinessProfile::default()
}

fn prompt(id: &str, title: &str, category: &str, text: &str) -> PromptTemplate {
    PromptTemplate::new(id, title, category, text)
}

pub fn seed_library() -> Vec<PromptTemplate> {
    vec![
        // Finnish business context
        prompt(
            "L_01",
            "NDA Generator (Mutual)",
            "Legal",
            "Draft a mutual Non-Disclosure Agreement (NDA) between [My Company] and [Counterparty Name] for the purpose of [Purpose]. Ensure jurisdiction is set to Helsinki District Court.",
        )
        .with_system_instruction(
            "Act as a senior Finnish contract lawyer. Draft under Finnish law (Sopimusoikeus). Be precise, avoid \"rally English\". Use specific terms like \"liikesalaisuus\".",
        ),
        prompt(
            "L_02",
            "Liability Risk Check",
            "Legal",
            "Review the following contract clause for unlimited liability risks: \n\n[Contract Text]",
        )
        .with_system_instruction(
            "Analyze for unlimited liability. Flag strictly based on Finnish commercial practice. Warn if liability cap is missing.",
        ),
        prompt(
            "A_01",
            "YEL Explainer",
            "Admin",
            "Explain how YEL insurance impacts my business if my estimated income (työtulo) is [Income Amount] EUR.",
        )
        .with_system_instruction(
            "Explain YEL (Yrittäjän eläkevakuutus) simply. Use current year rates. Focus on the impact on social security (Kela).",
        )
        .favorite(),
        prompt(
            "A_02",
            "VAT Calculator (ALV)",
            "Admin",
            "I charged a gross sum of [Total Amount] EUR. Calculate the VAT (ALV) portion and the net amount.",
        )
        .with_system_instruction(
            "Calculate VAT at standard Finnish rate (25.5%). Show formula: Gross / 1.255 = Net. Show Net and Tax portion clearly.",
        )
        .favorite(),
        prompt(
            "S_01",
            "Cold Email (B2B Finnish)",
            "Sales",
            "Write a cold introduction email to [Prospect Name] at [Company] offering [My Service].",
        )
        .with_system_instruction(
            "Write a persuasive B2B cold email in modern Finnish. Value-first, concise. No fluff. Respect the recipient's time.",
        ),
        prompt(
            "S_02",
            "English Polish (Finglish Fixer)",
            "Sales",
            "Rewrite this text to sound like a native US executive, removing Finnish idioms: \n\n[Draft Text]",
        )
        .with_system_instruction(
            "Correct grammar. Remove \"Finglish\". Make it punchy and professional American English.",
        ),
        // Strategy
        prompt(
            "STRAT_01",
            "First Principles Thinking",
            "Strategy",
            "Deconstruct [Problem/Challenge] using 'First Principles' thinking. Break it down into its fundamental truths and build a novel solution up from there, ignoring standard conventions.",
        )
        .favorite(),
        prompt(
            "STRAT_02",
            "Jobs to be Done",
            "Strategy",
            "Analyze [Product/Service] using the 'Jobs to be Done' framework. Identify the functional, emotional, and social 'jobs' that users are hiring this product to do.",
        ),
        prompt(
            "STRAT_03",
            "Alex Hormozi Offer",
            "Strategy",
            "Refine this offer for [Product] to make it a 'Grand Slam Offer'. Focus on maximizing perceived value, minimizing risk, and increasing speed to result.",
        ),
        prompt(
            "STRAT_04",
            "Decision Matrix",
            "Strategy",
            "Help me decide between [Option A] and [Option B]. Create a weighted decision matrix considering cost, time, impact, and risk.",
        ),
        // Coding
        prompt(
            "CODE_01",
            "Socratic Debugging",
            "Coding",
            "I have a bug in my [Language] code. Don't just fix it. Act as a Socratic tutor and ask me probing questions to help me find the root cause of [Error Description].",
        ),
        prompt(
            "CODE_02",
            "Code Architecture",
            "Coding",
            "Act as a Senior Solutions Architect. Design a high-level system architecture for [Project Description] using [Tech Stack]. Outline key components, data flow, and potential bottlenecks.",
        ),
        prompt(
            "CODE_03",
            "Complexity Analysis",
            "Coding",
            "Analyze the Time and Space complexity (Big O Notation) of this function. Suggest one optimization to improve efficiency: \n\n[Code Snippet]",
        ),
        prompt(
            "CODE_04",
            "Generate Unit Tests",
            "Coding",
            "Write comprehensive unit tests for this [Language] code using [Testing Framework]. Include edge cases and failure scenarios.",
        ),
        // Marketing, filed under Sales
        prompt(
            "SALES_03",
            "AIDA Framework",
            "Sales",
            "Write a landing page copy for [Product] using the AIDA (Attention, Interest, Desire, Action) framework. The target audience is [Audience].",
        ),
        prompt(
            "SALES_04",
            "Viral Hooks",
            "Sales",
            "Generate 5 'scroll-stopping' hooks for a social media post about [Topic]. Use the 'Open Loop' psychological technique to create intense curiosity.",
        ),
        prompt(
            "SALES_05",
            "Objection Handling",
            "Sales",
            "List the top 5 potential objections a customer might have about buying [Product]. Write a persuasive counter-argument for each one.",
        ),
        prompt(
            "SALES_06",
            "SEO Strategy",
            "Sales",
            "Generate a list of 10 high-volume, low-competition SEO keywords for a blog about [Niche]. Group them by 'Informational' and 'Transactional' intent.",
        ),
        // Writing
        prompt(
            "WRITE_01",
            "The Hemingway Edit",
            "Writing",
            "Rewrite the following text to be punchier and clearer. Remove adverbs, use active voice, and shorten sentences in the style of Ernest Hemingway.",
        )
        .favorite(),
        prompt(
            "WRITE_02",
            "Analogy Generator",
            "Writing",
            "Explain the concept of [Complex Concept] using a simple analogy involving [Everyday Object/Activity] so a non-expert can understand it instantly.",
        ),
        prompt(
            "WRITE_03",
            "Tone Shift",
            "Writing",
            "Rewrite this message to [Recipient] changing the tone from [Current Tone] to [Desired Tone] (e.g., authoritative, empathetic, witty).",
        ),
        prompt(
            "WRITE_04",
            "Storytelling Arc",
            "Writing",
            "Outline a blog post about [Topic] using the 'Hero's Journey' narrative structure. Define the Call to Adventure, the Ordeal, and the Resolution.",
        ),
        // Productivity
        prompt(
            "PROD_01",
            "Feynman Technique",
            "Productivity",
            "Use the Feynman Technique to explain [Topic] to me as if I were a 12-year-old. Identify gaps in logic and simplify complex terms.",
        ),
        prompt(
            "PROD_02",
            "Pareto Principle (80/20)",
            "Productivity",
            "I want to learn [Skill]. Apply the 80/20 rule to identify the 20% of sub-skills that will give me 80% of the results. Create a 1-week learning plan.",
        ),
        prompt(
            "PROD_03",
            "Mental Model Pal",
            "Productivity",
            "I am facing [Problem]. Suggest 3 distinct Mental Models (e.g., Occam's Razor, Second-Order Thinking) I can use to solve this.",
        ),
        // Communication
        prompt(
            "COMM_01",
            "Negotiation Script",
            "Communication",
            "Act as an FBI negotiator. Script a response to [Scenario/Conflict]. Use 'Tactical Empathy' and 'Calibrated Questions' to lower tensions and gain leverage.",
        ),
    ]
}

pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "P_01".to_string(),
            name: "Consulting Hour".to_string(),
            product_type: ProductType::Service,
            price: 95.0,
            vat_rate: 25.5,
        },
        Product {
            id: "P_02".to_string(),
            name: "Website Audit".to_string(),
            product_type: ProductType::Service,
            price: 490.0,
            vat_rate: 25.5,
        },
        Product {
            id: "P_03".to_string(),
            name: "E-book: Yrittäjän opas".to_string(),
            product_type: ProductType::Product,
            price: 29.0,
            vat_rate: 14.0,
        },
    ]
}

fn seed_date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap_or(NaiveDate::MIN)
}

pub fn seed_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "T_03".to_string(),
            date: seed_date(1, 22),
            kind: TransactionKind::Expense,
            description: "Accounting software subscription".to_string(),
            amount: 39.0,
            status: TransactionStatus::Paid,
            customer: None,
            product_id: None,
        },
        Transaction {
            id: "T_02".to_string(),
            date: seed_date(1, 15),
            kind: TransactionKind::Income,
            description: "Website Audit".to_string(),
            amount: 490.0,
            status: TransactionStatus::Pending,
            customer: Some("Kahvila Aalto".to_string()),
            product_id: Some("P_02".to_string()),
        },
        Transaction {
            id: "T_01".to_string(),
            date: seed_date(1, 8),
            kind: TransactionKind::Income,
            description: "Consulting Hour".to_string(),
            amount: 95.0,
            status: TransactionStatus::Paid,
            customer: Some("Rakennus Virtanen Oy".to_string()),
            product_id: Some("P_01".to_string()),
        },
    ]
}
