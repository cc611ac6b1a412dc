//! Static clinical content for the console. Nothing here is live data;
//! every table is fixed copy the panels render verbatim.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientStatus {
    Stable,
    Improving,
    Critical,
}

impl PatientStatus {
    pub fn label(self) -> &'static str {
        match self {
            PatientStatus::Stable => "Stable",
            PatientStatus::Improving => "Improving",
            PatientStatus::Critical => "Critical",
        }
    }
}

pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

pub const STAT_CARDS: [StatCard; 4] = [
    StatCard {
        title: "Admitted Patients",
        value: "247",
        change: "+12 today",
    },
    StatCard {
        title: "In Treatment",
        value: "142",
        change: "+8 today",
    },
    StatCard {
        title: "ICU/Critical",
        value: "18",
        change: "-3 today",
    },
    StatCard {
        title: "Today's Appointments",
        value: "89",
        change: "23 remaining",
    },
];

pub struct Admission {
    pub name: &'static str,
    pub age: u8,
    pub condition: &'static str,
    pub room: &'static str,
    pub status: PatientStatus,
    pub time: &'static str,
}

pub const RECENT_ADMISSIONS: [Admission; 4] = [
    Admission {
        name: "Maria Santos",
        age: 34,
        condition: "Post-Surgery Recovery",
        room: "ICU-12",
        status: PatientStatus::Stable,
        time: "2 hours ago",
    },
    Admission {
        name: "John Rodriguez",
        age: 58,
        condition: "Cardiac Monitoring",
        room: "Ward 3A",
        status: PatientStatus::Improving,
        time: "5 hours ago",
    },
    Admission {
        name: "Ana Reyes",
        age: 45,
        condition: "Emergency Admission",
        room: "ER-5",
        status: PatientStatus::Critical,
        time: "7 hours ago",
    },
    Admission {
        name: "Carlos Mendoza",
        age: 29,
        condition: "Observation",
        room: "Ward 2B",
        status: PatientStatus::Stable,
        time: "12 hours ago",
    },
];

pub struct Alert {
    pub kind: &'static str,
    pub patient: &'static str,
    pub room: &'static str,
    pub time: &'static str,
    pub urgent: bool,
}

pub const PRIORITY_ALERTS: [Alert; 3] = [
    Alert {
        kind: "Lab Results Ready",
        patient: "Maria Santos",
        room: "ICU-12",
        time: "5 min ago",
        urgent: false,
    },
    Alert {
        kind: "Blood Pressure Alert",
        patient: "Ana Reyes",
        room: "ER-5",
        time: "12 min ago",
        urgent: true,
    },
    Alert {
        kind: "Medication Schedule",
        patient: "John Rodriguez",
        room: "Ward 3A",
        time: "20 min ago",
        urgent: false,
    },
];

pub struct ChartRecord {
    pub name: &'static str,
    pub age: u8,
    pub room: &'static str,
    pub admitted: &'static str,
    pub diagnosis: &'static str,
    pub status: PatientStatus,
    pub chart_id: &'static str,
}

pub const CHART_PATIENT: ChartRecord = ChartRecord {
    name: "Juan dela Cruz",
    age: 25,
    room: "ICU-15",
    admitted: "2024-01-15",
    diagnosis: "Post-operative monitoring",
    status: PatientStatus::Stable,
    chart_id: "EHR-2024-001",
};

pub struct VitalsRow {
    pub time: &'static str,
    pub bp: &'static str,
    pub hr: &'static str,
    pub temp: &'static str,
    pub o2: &'static str,
}

pub const VITAL_SIGNS: [VitalsRow; 4] = [
    VitalsRow {
        time: "08:00",
        bp: "120/80",
        hr: "72",
        temp: "98.6F",
        o2: "98%",
    },
    VitalsRow {
        time: "10:00",
        bp: "118/78",
        hr: "68",
        temp: "98.4F",
        o2: "99%",
    },
    VitalsRow {
        time: "12:00",
        bp: "122/82",
        hr: "70",
        temp: "98.8F",
        o2: "97%",
    },
    VitalsRow {
        time: "14:00",
        bp: "119/79",
        hr: "69",
        temp: "98.5F",
        o2: "98%",
    },
];

pub struct Medication {
    pub name: &'static str,
    pub dose: &'static str,
    pub frequency: &'static str,
    pub last_given: &'static str,
}

pub const MEDICATIONS: [Medication; 3] = [
    Medication {
        name: "Morphine",
        dose: "2mg",
        frequency: "Every 4 hours",
        last_given: "13:30",
    },
    Medication {
        name: "Antibiotics",
        dose: "500mg",
        frequency: "Every 8 hours",
        last_given: "12:00",
    },
    Medication {
        name: "Pain Relief",
        dose: "1 tablet",
        frequency: "As needed",
        last_given: "14:15",
    },
];

pub struct NursingNote {
    pub time: &'static str,
    pub note: &'static str,
    pub nurse: &'static str,
}

pub const NURSING_NOTES: [NursingNote; 4] = [
    NursingNote {
        time: "08:30",
        note: "Patient resting comfortably, no complaints of pain",
        nurse: "Sarah Johnson",
    },
    NursingNote {
        time: "10:45",
        note: "Vital signs stable, patient alert and responsive",
        nurse: "Mike Chen",
    },
    NursingNote {
        time: "12:20",
        note: "Medication administered as scheduled",
        nurse: "Sarah Johnson",
    },
    NursingNote {
        time: "14:10",
        note: "Patient requesting additional pain medication",
        nurse: "Lisa Park",
    },
];

pub const HOSPITAL_NAME: &str = "St. Mary's";
pub const HOSPITAL_SUBTITLE: &str = "Medical Center";

pub const PRIMARY_GREETING: &str = "Happy Birthday Guia!";
pub const SECONDARY_GREETING: &str = "Stay Beautiful";
