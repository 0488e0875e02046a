use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + parse, serialized as its display
/// string. Display strings match what the dashboard renders (statuses are
/// lowercase, types and specialties are title case).
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            /// Case-sensitive match on the display string.
            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $($s => Some(Self::$variant)),+,
                    _ => None,
                }
            }
        }
    };
}

str_enum!(AppointmentType {
    Consultation => "Consultation",
    FollowUp => "Follow-up",
    CheckUp => "Check-up",
    Emergency => "Emergency",
});

str_enum!(AppointmentStatus {
    Confirmed => "confirmed",
    Pending => "pending",
    Completed => "completed",
    Cancelled => "cancelled",
});

str_enum!(Gender {
    Female => "Female",
    Male => "Male",
    Other => "Other",
});

str_enum!(PatientStatus {
    Active => "active",
    Inactive => "inactive",
    Archived => "archived",
});

str_enum!(Specialty {
    Cardiology => "Cardiology",
    Neurology => "Neurology",
    Pediatrics => "Pediatrics",
    Orthopedics => "Orthopedics",
    Psychiatry => "Psychiatry",
});

str_enum!(DoctorStatus {
    Active => "active",
    Inactive => "inactive",
    OnLeave => "on leave",
});
