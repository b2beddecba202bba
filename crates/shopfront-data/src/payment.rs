//! Payment-method discovery.
//!
//! The add-to-cart control asks a [`PaymentMethodService`] once per mount
//! which checkout options exist, purely to render badges.

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde::Deserialize;

use crate::client::FetchClient;
use crate::error::FetchError;

/// Identifier of the card processor.
pub const STRIPE: &str = "stripe";
/// Identifier of PayPal checkout.
pub const PAYPAL: &str = "paypal";

/// Set of available payment method identifiers.
///
/// Identifiers are trimmed and lowercased on insertion; blanks are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentMethods(BTreeSet<String>);

impl PaymentMethods {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            ids.into_iter()
                .map(|id| id.as_ref().trim().to_lowercase())
                .filter(|id| !id.is_empty())
                .collect(),
        )
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(&id.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn has_stripe(&self) -> bool {
        self.contains(STRIPE)
    }

    pub fn has_paypal(&self) -> bool {
        self.contains(PAYPAL)
    }
}

impl<S: AsRef<str>> FromIterator<S> for PaymentMethods {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Source of available payment methods.
#[async_trait(?Send)]
pub trait PaymentMethodService {
    async fn available_methods(&self) -> Result<PaymentMethods, FetchError>;
}

/// Fixed set of methods, for demos and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticPaymentMethods {
    methods: PaymentMethods,
}

impl StaticPaymentMethods {
    pub fn new(methods: PaymentMethods) -> Self {
        Self { methods }
    }
}

#[async_trait(?Send)]
impl PaymentMethodService for StaticPaymentMethods {
    async fn available_methods(&self) -> Result<PaymentMethods, FetchError> {
        Ok(self.methods.clone())
    }
}

/// Fetches methods from a JSON endpoint.
///
/// Accepts either a bare array (`["stripe","paypal"]`) or an object with a
/// `methods` array.
#[derive(Debug, Clone)]
pub struct HttpPaymentMethods {
    client: FetchClient,
    url: String,
}

impl HttpPaymentMethods {
    pub fn new(client: FetchClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PaymentMethodsPayload {
    List(Vec<String>),
    Wrapped { methods: Vec<String> },
}

impl From<PaymentMethodsPayload> for PaymentMethods {
    fn from(payload: PaymentMethodsPayload) -> Self {
        match payload {
            PaymentMethodsPayload::List(ids) => PaymentMethods::new(ids),
            PaymentMethodsPayload::Wrapped { methods } => PaymentMethods::new(methods),
        }
    }
}

/// Decode a payment-methods response body.
pub fn parse_payment_methods(body: &str) -> Result<PaymentMethods, FetchError> {
    let payload: PaymentMethodsPayload = serde_json::from_str(body)?;
    Ok(payload.into())
}

#[async_trait(?Send)]
impl PaymentMethodService for HttpPaymentMethods {
    async fn available_methods(&self) -> Result<PaymentMethods, FetchError> {
        let payload: PaymentMethodsPayload = self.client.get_json(&self.url).await?;
        Ok(payload.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_methods_normalized() {
        let methods = PaymentMethods::new([" Stripe ", "PAYPAL", ""]);
        assert!(methods.has_stripe());
        assert!(methods.has_paypal());
        assert_eq!(methods.iter().collect::<Vec<_>>(), vec!["paypal", "stripe"]);
    }

    #[test]
    fn test_empty_methods() {
        let methods = PaymentMethods::empty();
        assert!(methods.is_empty());
        assert!(!methods.has_stripe());
        assert!(!methods.has_paypal());
    }

    #[test]
    fn test_parse_payload_shapes() {
        let list = parse_payment_methods(r#"["stripe","paypal"]"#).unwrap();
        assert!(list.has_stripe() && list.has_paypal());

        let wrapped = parse_payment_methods(r#"{"methods":["paypal"]}"#).unwrap();
        assert!(!wrapped.has_stripe() && wrapped.has_paypal());

        assert!(parse_payment_methods("[]").unwrap().is_empty());
        assert!(matches!(
            parse_payment_methods(r#"{"providers":[]}"#),
            Err(FetchError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_static_service() {
        let service = StaticPaymentMethods::new(["stripe"].into_iter().collect());
        let methods = service.available_methods().await.unwrap();
        assert!(methods.has_stripe());
        assert!(!methods.has_paypal());
    }

    #[tokio::test]
    async fn test_http_service_unreachable() {
        let service = HttpPaymentMethods::new(
            FetchClient::new().with_base_url("http://127.0.0.1:9"),
            "/api/payment-methods",
        );
        assert!(service.available_methods().await.is_err());
    }
}
