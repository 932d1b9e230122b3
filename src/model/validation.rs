//! Form validation shared by the client forms and the API.
//!
//! Every error displays as the message shown to the user.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{
    label::CreateLabelDto,
    print::{PrintRequestDto, MAX_COPIES, MIN_COPIES},
    product::{CreateProductDto, MAX_VALIDITY_DAYS, MIN_VALIDITY_DAYS},
    template::SaveTemplateDto,
    user::{CreateCookDto, PinLoginDto},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Product, expiration date and quantity are required")]
    LabelFieldsRequired,
    #[error("Expiration date cannot be before the production date")]
    ExpirationBeforeProduction,
    #[error("Product name and department are required")]
    ProductFieldsRequired,
    #[error("Validity must be between 1 and 30 days")]
    ValidityOutOfRange,
    #[error("Username and PIN are required")]
    CookFieldsRequired,
    #[error("PIN must have exactly 4 digits")]
    InvalidPin,
    #[error("Username and PIN are required to sign in")]
    LoginFieldsRequired,
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
    #[error("Select at least one label to print")]
    PrintSelectionEmpty,
    #[error("Each label can only be selected once per print job")]
    DuplicateLabelSelection,
    #[error("Unknown printer: {0}")]
    UnknownPrinter(String),
    #[error("Copies must be between 1 and 10")]
    CopiesOutOfRange,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// A PIN is exactly four ASCII digits
pub fn is_valid_pin(pin: &str) -> bool {
    pin.len() == 4 && pin.bytes().all(|b| b.is_ascii_digit())
}

/// Validates a new label.
///
/// The expiration date is required here because the form always derives one from the
/// selected product before submitting; the API fills it in before validating.
pub fn validate_label(label: &CreateLabelDto) -> Result<(), ValidationError> {
    let Some(expiration) = label.expiration_date else {
        return Err(ValidationError::LabelFieldsRequired);
    };
    if is_blank(&label.product_name) || is_blank(&label.quantity) {
        return Err(ValidationError::LabelFieldsRequired);
    }
    if let Some(production) = label.production_date {
        if expiration < production {
            return Err(ValidationError::ExpirationBeforeProduction);
        }
    }

    Ok(())
}

pub fn validate_product(product: &CreateProductDto) -> Result<(), ValidationError> {
    if is_blank(&product.name) || is_blank(&product.department) {
        return Err(ValidationError::ProductFieldsRequired);
    }
    if !(MIN_VALIDITY_DAYS..=MAX_VALIDITY_DAYS).contains(&product.default_validity_days) {
        return Err(ValidationError::ValidityOutOfRange);
    }

    Ok(())
}

pub fn validate_cook(cook: &CreateCookDto) -> Result<(), ValidationError> {
    if is_blank(&cook.username) || cook.pin.is_empty() {
        return Err(ValidationError::CookFieldsRequired);
    }
    if !is_valid_pin(&cook.pin) {
        return Err(ValidationError::InvalidPin);
    }

    Ok(())
}

pub fn validate_login(login: &PinLoginDto) -> Result<(), ValidationError> {
    if is_blank(&login.username) || login.pin.is_empty() {
        return Err(ValidationError::LoginFieldsRequired);
    }

    Ok(())
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].bytes().all(|b| b.is_ascii_hexdigit())
}

pub fn validate_template(template: &SaveTemplateDto) -> Result<(), ValidationError> {
    let invalid = |message: &str| Err(ValidationError::InvalidTemplate(message.to_string()));

    if is_blank(&template.name) {
        return invalid("name is required");
    }
    if !(20..=150).contains(&template.width) || !(20..=150).contains(&template.height) {
        return invalid("width and height must be between 20 and 150 mm");
    }
    let fonts = &template.font_size;
    if [fonts.product, fonts.details, fonts.small]
        .iter()
        .any(|size| !(6..=48).contains(size))
    {
        return invalid("font sizes must be between 6 and 48 pt");
    }
    if !(32..=160).contains(&template.qr_size) {
        return invalid("QR size must be between 32 and 160 px");
    }
    let colors = &template.colors;
    if ![&colors.background, &colors.text, &colors.accent]
        .iter()
        .all(|color| is_hex_color(color))
    {
        return invalid("colors must be #rrggbb hex values");
    }

    Ok(())
}

/// Validates the shape of a print request; printer existence is checked against the catalog.
///
/// Repeated label ids are rejected; `copies` is the only way to print a label more than once.
pub fn validate_print(request: &PrintRequestDto) -> Result<(), ValidationError> {
    if request.label_ids.is_empty() {
        return Err(ValidationError::PrintSelectionEmpty);
    }
    let mut seen = HashSet::with_capacity(request.label_ids.len());
    if !request.label_ids.iter().all(|id| seen.insert(id)) {
        return Err(ValidationError::DuplicateLabelSelection);
    }
    if crate::model::print::find_printer(&request.printer_id).is_none() {
        return Err(ValidationError::UnknownPrinter(request.printer_id.clone()));
    }
    if !(MIN_COPIES..=MAX_COPIES).contains(&request.copies) {
        return Err(ValidationError::CopiesOutOfRange);
    }

    Ok(())
}
