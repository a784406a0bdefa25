use std::error::Error;

pub fn validate_base58_string(base58_string: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    logic::validate(base58_string).map_err(|e| format!("invalid base58 string: {}", e).into())
}

/// Accepts an optional `0x` prefix and any even number of hex digits.
pub fn validate_hex_string(hex_string: &str) -> Result<Vec<u8>, Box<dyn Error + Send + Sync>> {
    let digits = hex_string
        .strip_prefix("0x")
        .or_else(|| hex_string.strip_prefix("0X"))
        .unwrap_or(hex_string);
    hex::decode(digits).map_err(|e| format!("Invalid hex string: {}", e).into())
}

pub fn validate_address_hex_string(hex_string: &str) -> Result<Vec<u8>, Box<dyn Error + Send + Sync>> {
    let address = validate_hex_string(hex_string)?;
    if address.len() != logic::ID_ADDRESS_LEN {
        return Err(format!(
            "Address must be {} hex characters ({} bytes)",
            logic::ID_ADDRESS_LEN * 2,
            logic::ID_ADDRESS_LEN
        )
        .into());
    }
    Ok(address)
}

pub fn validate_id_prefix(prefix: &str) -> Result<logic::Code, Box<dyn Error + Send + Sync>> {
    if prefix.len() != logic::ID_PREFIX_LEN {
        return Err(format!("Id prefix must be {} characters: '{}'", logic::ID_PREFIX_LEN, prefix).into());
    }
    match logic::Code::from_prefix(prefix) {
        logic::Code::Unknown => Err(format!("unknown prefix ({})", prefix).into()),
        code => Ok(code),
    }
}
