use std::error::Error;

pub fn format(prefix: &str, address: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
    let code = common::validate_id_prefix(prefix)?;
    let address = common::validate_address_hex_string(address)?;
    let id = logic::Id::new(code, &address)?;
    Ok(id.to_string())
}

pub fn parse(text: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
    let id: logic::Id = text.parse()?;
    log::debug!("parsed id bytes {}", hex::encode(id.to_bytes()));
    Ok(format!("{}\n{}", id.code(), hex::encode(id.address())))
}
