use llm_strings::{LlmStringsError, Result, parse};

#[test]
fn test_error_display() {
    let err = LlmStringsError::InvalidScheme("https".to_string());
    assert!(err.to_string().contains("https"));
    assert!(err.to_string().contains("llm"));
}

#[test]
fn test_url_errors_convert() {
    let err: LlmStringsError = url::Url::parse("::").unwrap_err().into();
    assert!(matches!(err, LlmStringsError::InvalidUrl(_)));
}

#[test]
fn test_missing_parts() {
    assert!(LlmStringsError::MissingHost.to_string().contains("host"));
    assert!(LlmStringsError::MissingModel.to_string().contains("model"));
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        parse("llm://api.openai.com/")?;
        Ok(())
    }
    assert!(matches!(returns_error(), Err(LlmStringsError::MissingModel)));
}
