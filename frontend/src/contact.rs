use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("informe seu nome")]
    MissingName,
    #[error("telefone inválido: {0}")]
    InvalidPhone(String),
    #[error("falha ao enviar o formulário: {0}")]
    Request(String),
}

fn digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `https://wa.me/<digits>` with an optional prefilled message.
pub fn whatsapp_link(number: &str, message: Option<&str>) -> String {
    let base = format!("https://wa.me/{}", digits(number));
    match message {
        Some(text) if !text.trim().is_empty() => {
            format!("{}?text={}", base, urlencoding::encode(text))
        }
        _ => base,
    }
}

pub fn tel_link(number: &str) -> String {
    let trimmed = number.trim_start();
    let plus = if trimmed.starts_with('+') { "+" } else { "" };
    format!("tel:{}{}", plus, digits(number))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactReason {
    #[default]
    Alcohol,
    Drugs,
    Gambling,
    OtherAddictions,
    GeneralQuestions,
}

impl ContactReason {
    pub const ALL: [ContactReason; 5] = [
        ContactReason::Alcohol,
        ContactReason::Drugs,
        ContactReason::Gambling,
        ContactReason::OtherAddictions,
        ContactReason::GeneralQuestions,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactReason::Alcohol => "Tratamento para Álcool",
            ContactReason::Drugs => "Tratamento para Drogas",
            ContactReason::Gambling => "Vício em Jogos/Apostas",
            ContactReason::OtherAddictions => "Outros Vícios",
            ContactReason::GeneralQuestions => "Dúvidas Gerais",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|reason| reason.label() == label)
    }
}

/// Body of the contact POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    pub reason: String,
}

/// Raw field values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub reason: ContactReason,
}

impl ContactForm {
    /// Accepts Brazilian numbers with area code (10 or 11 digits), with or
    /// without the 55 country prefix.
    pub fn validate(&self) -> Result<ContactRequest, ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        let phone = digits(&self.phone);
        let national = match phone.len() {
            10 | 11 => phone.as_str(),
            12 | 13 if phone.starts_with("55") => &phone[2..],
            _ => return Err(ContactError::InvalidPhone(self.phone.trim().to_string())),
        };
        Ok(ContactRequest {
            name: name.to_string(),
            phone: format!("55{}", national),
            reason: self.reason.label().to_string(),
        })
    }
}

impl ContactRequest {
    pub fn whatsapp_message(&self) -> String {
        format!(
            "Olá, meu nome é {}. Gostaria de informações sobre: {}. Meu telefone: {}",
            self.name, self.reason, self.phone
        )
    }
}

/// Posts the request to the contact endpoint.
pub async fn submit(request: &ContactRequest) -> Result<(), ContactError> {
    let response = Request::post(&config::get_contact_endpoint())
        .json(request)
        .map_err(|e| ContactError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Request(e.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(ContactError::Request(format!("status {}", response.status())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_message() {
        assert_eq!(
            whatsapp_link("+55 (11) 99999-9999", Some("Olá, preciso de ajuda")),
            "https://wa.me/5511999999999?text=Ol%C3%A1%2C%20preciso%20de%20ajuda"
        );
    }

    #[test]
    fn whatsapp_link_without_message() {
        assert_eq!(whatsapp_link("5511999999999", None), "https://wa.me/5511999999999");
        assert_eq!(whatsapp_link("5511999999999", Some("  ")), "https://wa.me/5511999999999");
    }

    #[test]
    fn tel_link_keeps_plus_only() {
        assert_eq!(tel_link("0800 123 4567"), "tel:08001234567");
        assert_eq!(tel_link("+55 11 4002-8922"), "tel:+551140028922");
    }

    #[test]
    fn form_requires_name() {
        let form = ContactForm {
            name: "   ".into(),
            phone: "(11) 99999-9999".into(),
            ..ContactForm::default()
        };
        assert_eq!(form.validate(), Err(ContactError::MissingName));
    }

    #[test]
    fn form_normalizes_phone() {
        let form = ContactForm {
            name: " Maria ".into(),
            phone: "(11) 99999-9999".into(),
            reason: ContactReason::Gambling,
        };
        let request = form.validate().unwrap();
        assert_eq!(request.name, "Maria");
        assert_eq!(request.phone, "5511999999999");
        assert_eq!(request.reason, "Vício em Jogos/Apostas");

        let with_country = ContactForm {
            phone: "+55 11 3333-4444".into(),
            ..form
        };
        assert_eq!(with_country.validate().unwrap().phone, "551133334444");
    }

    #[test]
    fn form_rejects_short_phone() {
        let form = ContactForm {
            name: "João".into(),
            phone: "9999-999".into(),
            ..ContactForm::default()
        };
        assert_eq!(
            form.validate(),
            Err(ContactError::InvalidPhone("9999-999".into()))
        );
    }

    #[test]
    fn request_serializes_to_json() {
        let request = ContactRequest {
            name: "Ana".into(),
            phone: "5511999999999".into(),
            reason: ContactReason::Drugs.label().into(),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["reason"], "Tratamento para Drogas");
        assert!(request.whatsapp_message().contains("Ana"));
    }

    #[test]
    fn reason_labels_round_trip() {
        for reason in ContactReason::ALL {
            assert_eq!(ContactReason::from_label(reason.label()), Some(reason));
        }
    }
}
