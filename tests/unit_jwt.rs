use blogdesk::config::JwtConfig;
use blogdesk_auth::{create_access_token, verify_token};
use uuid::Uuid;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

#[test]
fn test_create_access_token_success() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let result = create_access_token(user_id, "admin@example.com", &jwt_config);

    assert!(result.is_ok());
    assert!(!result.unwrap().is_empty());
}

#[test]
fn test_verify_token_success() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();
    let email = "admin@example.com";

    let token = create_access_token(user_id, email, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.email, email);
}

#[test]
fn test_verify_token_invalid() {
    let jwt_config = get_test_jwt_config();

    let result = verify_token("invalid.token.here", &jwt_config);

    assert!(result.is_err());
    assert_eq!(result.unwrap_err().status.as_u16(), 401);
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let token = create_access_token(Uuid::new_v4(), "admin@example.com", &jwt_config).unwrap();

    let wrong_config = JwtConfig {
        secret: "wrong_secret".to_string(),
        access_token_expiry: 3600,
    };

    assert!(verify_token(&token, &wrong_config).is_err());
}

#[test]
fn test_verify_token_empty() {
    let jwt_config = get_test_jwt_config();

    assert!(verify_token("", &jwt_config).is_err());
}

#[test]
fn test_token_expiry_is_set() {
    let jwt_config = get_test_jwt_config();
    let token = create_access_token(Uuid::new_v4(), "admin@example.com", &jwt_config).unwrap();

    let claims = verify_token(&token, &jwt_config).unwrap();

    assert!(claims.exp > claims.iat);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_token_with_special_characters_in_email() {
    let jwt_config = get_test_jwt_config();
    let email = "first.last+blog@sub.example.com";

    let token = create_access_token(Uuid::new_v4(), email, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.email, email);
}

#[test]
fn test_create_token_different_users_different_tokens() {
    let jwt_config = get_test_jwt_config();

    let token1 = create_access_token(Uuid::new_v4(), "a@example.com", &jwt_config).unwrap();
    let token2 = create_access_token(Uuid::new_v4(), "b@example.com", &jwt_config).unwrap();

    assert_ne!(token1, token2);
}
