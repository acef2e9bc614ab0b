use crate::error::AppError;
use crate::services;

pub fn run(symbol: &str, statement: &str) {
    let rt = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

    let result = rt.block_on(async {
        let client = super::build_client()?;
        let response = client.financial_statements(symbol, statement).await?;
        let tables = services::extract_statement_tables(&response);

        println!(
            "📄 {} statement: {}\n",
            statement,
            symbol.to_uppercase()
        );

        if tables.is_empty() {
            println!("No statement tables in the response.");
            return Ok(());
        }

        for table in &tables {
            let formatted = services::format_statement_table(table);
            if !formatted.headers.is_empty() {
                println!("{}", formatted.headers.join(" | "));
            }
            for row in &formatted.rows {
                println!("{}", row.join(" | "));
            }
            println!();
        }
        Ok::<(), AppError>(())
    });

    if let Err(e) = result {
        super::exit_with_error(e);
    }
}
