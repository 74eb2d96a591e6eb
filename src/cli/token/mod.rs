//! Token command - signs a bearer token with the resolved JWT secret

use clap::Args;

use crate::infrastructure::auth::{AuthClaims, JwtService};

#[derive(Debug, Args)]
pub struct TokenArgs {
    /// User id claim
    #[arg(long)]
    pub id: i64,

    /// Role claim (`admin` for mutating endpoints)
    #[arg(long)]
    pub role: String,

    /// Expiry in hours; the token never expires when omitted
    #[arg(long)]
    pub expires_in_hours: Option<u64>,
}

pub async fn run(args: TokenArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let settings = crate::resolve_settings(&config).await?;

    let token = sign(&settings.jwt_secret, &args)?;
    println!("{}", token);

    Ok(())
}

fn sign(secret: &str, args: &TokenArgs) -> anyhow::Result<String> {
    let claims = AuthClaims::new(args.id, args.role.clone(), args.expires_in_hours);
    Ok(JwtService::new(secret).sign(&claims)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::auth::TokenVerifier;

    #[test]
    fn test_signed_token_verifies() {
        let args = TokenArgs {
            id: 3,
            role: "admin".to_string(),
            expires_in_hours: Some(1),
        };

        let token = sign("cli-secret", &args).unwrap();
        let claims = JwtService::new("cli-secret").verify(&token).unwrap();

        assert_eq!(claims.id, Some(3));
        assert_eq!(claims.role.as_deref(), Some("admin"));
    }
}
