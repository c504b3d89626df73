//! Institution identity printed on every challan copy.

use serde::{Deserialize, Serialize};

/// Name, registration line and bank-account block shown in each band header.
///
/// `Default` carries the values of the issuing department this system was
/// built for; deployments with a different account swap the profile at
/// renderer construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionProfile {
    pub name: String,
    pub registration_line: String,
    /// The six lines of the bank-account detail block.
    pub bank_details: Vec<String>,
}

impl Default for InstitutionProfile {
    fn default() -> Self {
        Self {
            name: "The Islamia University of Bahawalpur".to_string(),
            registration_line: "F.T.N: 9020017-1".to_string(),
            bank_details: vec![
                "Account No: 00250025026967210000".to_string(),
                "First Women Bank".to_string(),
                "Account Title:".to_string(),
                "DEPARTMENT OF".to_string(),
                "ARTIFICIAL".to_string(),
                "INTELLIGENCE".to_string(),
            ],
        }
    }
}
