use crate::error::AppError;
use crate::services;
use crate::utils;

pub fn run() {
    let rt = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

    let result = rt.block_on(async {
        let refresh_token = utils::get_refresh_token()
            .ok_or_else(|| AppError::Config("MARKETDECK_REFRESH_TOKEN is not set".to_string()))?;

        let pair = services::refresh_access_token(&utils::get_base_url(), &refresh_token).await?;

        println!("🔑 New access token (valid {}s):", pair.expires_in);
        println!("{}", pair.access_token);
        println!("\n🔑 New refresh token:");
        println!("{}", pair.refresh_token);
        Ok::<(), AppError>(())
    });

    if let Err(e) = result {
        super::exit_with_error(e);
    }
}
