//! Doctor models.

use serde::{Deserialize, Serialize};

/// How a doctor relates to the clinic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DoctorRole {
    /// Sends patients in; earns referral bonuses
    Referring,
    /// Reads scans and signs reports
    Reporting,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub hospital: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub license_no: Option<String>,
    #[serde(default)]
    pub role: Option<DoctorRole>,
}

/// Payload for `POST /doctors`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewDoctor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_no: Option<String>,
    pub role: DoctorRole,
}

/// Doctors split into the two technician selection lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorLists {
    pub referring: Vec<Doctor>,
    pub reporting: Vec<Doctor>,
}

/// Partition doctors by role tag. Untagged doctors appear in neither list.
pub fn partition_doctors(doctors: &[Doctor]) -> DoctorLists {
    let mut lists = DoctorLists::default();
    for doctor in doctors {
        match doctor.role {
            Some(DoctorRole::Referring) => lists.referring.push(doctor.clone()),
            Some(DoctorRole::Reporting) => lists.reporting.push(doctor.clone()),
            None => {}
        }
    }
    lists
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(id: i64, role: Option<DoctorRole>) -> Doctor {
        Doctor {
            id,
            name: format!("Dr. {}", id),
            hospital: None,
            phone: None,
            license_no: None,
            role,
        }
    }

    #[test]
    fn test_partition_by_role() {
        let doctors = vec![
            doctor(1, Some(DoctorRole::Referring)),
            doctor(2, Some(DoctorRole::Reporting)),
            doctor(3, None),
            doctor(4, Some(DoctorRole::Referring)),
        ];
        let lists = partition_doctors(&doctors);
        assert_eq!(lists.referring.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(lists.reporting.iter().map(|d| d.id).collect::<Vec<_>>(), vec![2]);
    }
}
