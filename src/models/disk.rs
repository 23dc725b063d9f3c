/// One filesystem line of `df -h`, sizes left human-formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskRow {
    pub mount_point: String,
    pub used: String,
    pub available: String,
}
