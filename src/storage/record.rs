use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::codec;
use crate::{
    AnnErr, Result,
    activations::ActFn,
    network::{Ann, Config, Params},
};

/// The flattened form of a trained network used at the persistence boundary.
///
/// The id and creation timestamp belong to whoever stores the record: they stay nil / empty
/// until a [`Repository`](super::Repository) assigns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub id: Uuid,
    /// RFC 3339 timestamp.
    #[serde(default)]
    pub created_at: String,
    #[serde(flatten)]
    pub config: Config,
    pub w_hidden: Vec<u8>,
    pub b_hidden: Vec<u8>,
    pub w_out: Vec<u8>,
    pub b_out: Vec<u8>,
}

impl TransferRecord {
    /// Flattens a trained network, the record takes the network's current record id.
    ///
    /// # Errors
    /// `AnnErr::UntrainedModel` if the network has no parameters.
    pub fn from_ann<A: ActFn>(ann: &Ann<A>) -> Result<Self> {
        let params = ann.params().ok_or(AnnErr::UntrainedModel)?;

        Ok(Self {
            id: ann.record_id(),
            created_at: String::new(),
            config: *ann.config(),
            w_hidden: codec::encode(params.w_hidden()),
            b_hidden: codec::encode(params.b_hidden()),
            w_out: codec::encode(params.w_out()),
            b_out: codec::encode(params.b_out()),
        })
    }

    /// Rebuilds the configuration and parameters the record holds.
    ///
    /// # Errors
    /// `AnnErr::Format` if a matrix doesn't decode, `AnnErr::InvalidConfig` if the
    /// configuration breaks its invariants and `AnnErr::Shape` if the matrices don't fit it.
    pub fn decode(&self) -> Result<(Config, Params)> {
        self.config.validate()?;

        let params = Params::new(
            &self.config,
            codec::decode("hidden weights", &self.w_hidden)?,
            codec::decode("hidden bias", &self.b_hidden)?,
            codec::decode("output weights", &self.w_out)?,
            codec::decode("output bias", &self.b_out)?,
        )?;

        Ok((self.config, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{activations::Identity, dataset::Dataset, initialization::FixedParamGen};

    fn trained() -> Ann<Identity> {
        let config = Config::new(2, 3, 1, 1, 0.1).unwrap();
        let dataset = Dataset::new(ndarray::Array2::ones((2, 2)), ndarray::Array2::ones((2, 1)));

        let mut ann = Ann::new(config, Identity);
        ann.train_with(&dataset.unwrap(), FixedParamGen::constant(0.2, config.num_params()))
            .unwrap();
        ann
    }

    #[test]
    fn untrained_networks_have_no_record() {
        let ann = Ann::new(Config::new(1, 1, 1, 1, 0.1).unwrap(), Identity);
        assert!(matches!(TransferRecord::from_ann(&ann), Err(AnnErr::UntrainedModel)));
    }

    #[test]
    fn decodes_what_it_encodes() {
        let ann = trained();
        let record = TransferRecord::from_ann(&ann).unwrap();

        assert!(record.id.is_nil());
        assert!(record.created_at.is_empty());

        let (config, params) = record.decode().unwrap();
        assert_eq!(&config, ann.config());
        assert_eq!(Some(&params), ann.params());
    }

    #[test]
    fn config_is_flattened() {
        let record = TransferRecord::from_ann(&trained()).unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["hidden_size"], 3);
        assert_eq!(json["epochs"], 1);
        assert!(json.get("config").is_none());
    }

    #[test]
    fn mismatched_matrices_are_rejected() {
        let mut record = TransferRecord::from_ann(&trained()).unwrap();
        record.config.hidden_size = 4;

        assert!(matches!(record.decode(), Err(AnnErr::Shape { .. })));
    }

    #[test]
    fn corrupted_blobs_are_rejected() {
        let mut record = TransferRecord::from_ann(&trained()).unwrap();
        record.b_out.truncate(3);

        assert!(matches!(record.decode(), Err(AnnErr::Format(msg)) if msg.contains("output bias")));
    }
}
