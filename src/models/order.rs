/// Which intake form produced an [`OrderRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    Order,
    Consultation,
}

/// Contact details captured by the order / consultation form.
///
/// Fire-and-forget: there is no backend contract, the request is only
/// acknowledged with a transient confirmation.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    pub kind: OrderKind,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

impl OrderRequest {
    pub fn new(kind: OrderKind, name: String, phone: String, email: Option<String>) -> Self {
        Self {
            kind,
            name,
            phone,
            email,
        }
    }
}

/// Free-text feedback captured by the "suggest an idea" form.
#[derive(Debug, Clone)]
pub struct IdeaRequest {
    pub idea: String,
    pub contact: Option<String>,
}

impl IdeaRequest {
    pub fn new(idea: String, contact: Option<String>) -> Self {
        Self { idea, contact }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_request_captures_kind() {
        let order = OrderRequest::new(
            OrderKind::Order,
            "Ivan".to_string(),
            "+7 900 000 00 00".to_string(),
            None,
        );
        let consult = OrderRequest::new(
            OrderKind::Consultation,
            "Ivan".to_string(),
            "+7 900 000 00 00".to_string(),
            Some("ivan@example.com".to_string()),
        );

        assert_eq!(order.kind, OrderKind::Order);
        assert_eq!(consult.kind, OrderKind::Consultation);
        assert_ne!(order.kind, consult.kind);
        assert_eq!(consult.email.as_deref(), Some("ivan@example.com"));
    }
}
