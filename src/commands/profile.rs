use crate::error::AppError;

pub fn run(symbol: &str) {
    let rt = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

    let result = rt.block_on(async {
        let client = super::build_client()?;
        let response = client.company_profile(symbol).await?;
        println!("🏢 Company profile: {}\n", symbol.to_uppercase());
        super::print_data(&response);
        Ok::<(), AppError>(())
    });

    if let Err(e) = result {
        super::exit_with_error(e);
    }
}
