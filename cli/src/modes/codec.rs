use std::error::Error;

pub fn encode(input: &str, utf8: bool) -> Result<String, Box<dyn Error + Send + Sync>> {
    let bytes = if utf8 {
        input.as_bytes().to_vec()
    } else {
        common::validate_hex_string(input)?
    };
    log::debug!("encoding {} bytes", bytes.len());
    Ok(logic::encode(&bytes))
}

pub fn decode(text: &str, utf8: bool) -> Result<String, Box<dyn Error + Send + Sync>> {
    let bytes = logic::decode(text)?;
    log::debug!("decoded {} bytes", bytes.len());
    if utf8 {
        String::from_utf8(bytes).map_err(|e| format!("Decoded bytes are not valid UTF-8: {}", e).into())
    } else {
        Ok(hex::encode(bytes))
    }
}
