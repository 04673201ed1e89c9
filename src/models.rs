use serde::{Deserialize, Serialize};

/// Root of the `__NEXT_DATA__` payload embedded in a Groww option page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageData {
    pub props: Props,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Props {
    #[serde(rename = "pageProps")]
    pub page_props: PageProps,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageProps {
    pub data: PagePayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagePayload {
    pub company: Company,

    #[serde(rename = "optionChain")]
    pub option_chain: OptionChainPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub name: String,

    #[serde(rename = "liveData", default)]
    pub live_data: CompanyLiveData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyLiveData {
    #[serde(default)]
    pub ltp: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionChainPayload {
    /// Present on the main page; the per-expiry pages only carry contracts.
    #[serde(rename = "aggregatedDetails", default)]
    pub aggregated_details: Option<AggregatedDetails>,

    #[serde(rename = "optionContracts", default)]
    pub option_contracts: Vec<OptionContract>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedDetails {
    #[serde(rename = "lotSize")]
    pub lot_size: f64,

    #[serde(rename = "expiryDates", default)]
    pub expiry_dates: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionContract {
    /// The page serves strikes multiplied by 100 (paise)
    #[serde(rename = "strikePrice")]
    pub strike_price: f64,

    #[serde(default)]
    pub ce: Option<ContractSide>,

    #[serde(default)]
    pub pe: Option<ContractSide>,
}

impl OptionContract {
    pub fn strike_rupees(&self) -> f64 {
        self.strike_price / 100.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractSide {
    #[serde(rename = "longDisplayName", default)]
    pub long_display_name: String,

    #[serde(rename = "liveData", default)]
    pub live_data: OptionLiveData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionLiveData {
    #[serde(default)]
    pub ltp: f64,

    #[serde(default)]
    pub oi: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_main_page_payload() {
        let raw = r#"{
            "props": {
                "pageProps": {
                    "data": {
                        "company": {
                            "name": "Infosys",
                            "liveData": { "ltp": 1450.5 }
                        },
                        "optionChain": {
                            "aggregatedDetails": {
                                "lotSize": 400,
                                "expiryDates": ["25-Sep-2025", "30-Oct-2025"]
                            }
                        }
                    }
                }
            }
        }"#;

        let page: PageData = serde_json::from_str(raw).unwrap();
        let data = page.props.page_props.data;
        assert_eq!(data.company.name, "Infosys");
        assert_eq!(data.company.live_data.ltp, 1450.5);

        let details = data.option_chain.aggregated_details.unwrap();
        assert_eq!(details.lot_size, 400.0);
        assert_eq!(details.expiry_dates.len(), 2);
        assert!(data.option_chain.option_contracts.is_empty());
    }

    #[test]
    fn test_parse_expiry_page_contracts() {
        let raw = r#"{
            "props": {
                "pageProps": {
                    "data": {
                        "company": { "name": "Infosys", "liveData": { "ltp": 1450.5 } },
                        "optionChain": {
                            "optionContracts": [
                                {
                                    "strikePrice": 130000,
                                    "pe": {
                                        "longDisplayName": "Infosys 1300 PE",
                                        "liveData": { "ltp": 12.4, "oi": 820 }
                                    }
                                },
                                { "strikePrice": 160000, "ce": null, "pe": null }
                            ]
                        }
                    }
                }
            }
        }"#;

        let page: PageData = serde_json::from_str(raw).unwrap();
        let contracts = page.props.page_props.data.option_chain.option_contracts;
        assert_eq!(contracts.len(), 2);
        assert_eq!(contracts[0].strike_rupees(), 1300.0);

        let put = contracts[0].pe.as_ref().unwrap();
        assert_eq!(put.long_display_name, "Infosys 1300 PE");
        assert_eq!(put.live_data.oi, 820.0);

        assert!(contracts[1].ce.is_none());
        assert!(contracts[1].pe.is_none());
    }

    #[test]
    fn test_missing_live_data_defaults_to_zero() {
        let raw = r#"{
            "strikePrice": 150000,
            "ce": { "longDisplayName": "Infosys 1500 CE" }
        }"#;

        let contract: OptionContract = serde_json::from_str(raw).unwrap();
        let call = contract.ce.unwrap();
        assert_eq!(call.live_data.ltp, 0.0);
        assert_eq!(call.live_data.oi, 0.0);
    }
}
