use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct PayBillInput {
    #[serde(rename = "billId")]
    pub bill_id: String,
}
