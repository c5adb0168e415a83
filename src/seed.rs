//! The original demo's hardcoded reference data, supplied as a seed
//! dataset. Everything here is fixture data for the UI to render; none of
//! it is required for the core logic to function.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::model::candidacy::{CandidacyRequest, RequestStatus};
use crate::model::election::{BallotEntry, Election, ElectionState};

/// The three candidacy requests preloaded on the admin review screen.
pub fn candidacy_requests() -> Vec<CandidacyRequest> {
    vec![
        CandidacyRequest {
            id: 1,
            full_name: "Alice Johnson".to_string(),
            student_id: "STU001".to_string(),
            email: "alice.johnson@university.edu".to_string(),
            phone: "+1-555-0123".to_string(),
            election_type: "Student Council".to_string(),
            party: "Progressive Students".to_string(),
            experience: "2 years as class representative, organized 5 campus events".to_string(),
            manifesto: "Focus on improving campus facilities and student welfare programs"
                .to_string(),
            status: RequestStatus::Pending,
            submitted_at: timestamp(2024, 1, 15, 10, 30),
        },
        CandidacyRequest {
            id: 2,
            full_name: "Michael Chen".to_string(),
            student_id: "STU002".to_string(),
            email: "michael.chen@university.edu".to_string(),
            phone: "+1-555-0124".to_string(),
            election_type: "Presidential".to_string(),
            party: "Independent".to_string(),
            experience: "Former debate team captain, volunteer coordinator".to_string(),
            manifesto: "Promote transparency and accountability in student governance".to_string(),
            status: RequestStatus::Pending,
            submitted_at: timestamp(2024, 1, 14, 14, 20),
        },
        CandidacyRequest {
            id: 3,
            full_name: "Sarah Williams".to_string(),
            student_id: "STU003".to_string(),
            email: "sarah.williams@university.edu".to_string(),
            phone: "+1-555-0125".to_string(),
            election_type: "Senate".to_string(),
            party: "Student Unity Party".to_string(),
            experience: "Student newspaper editor, academic excellence award recipient".to_string(),
            manifesto: "Bridge the gap between students and administration".to_string(),
            status: RequestStatus::Approved,
            submitted_at: timestamp(2024, 1, 13, 9, 15),
        },
    ]
}

/// The demo's elections: two decided, one mid-vote, two on the horizon.
pub fn elections() -> Vec<Election> {
    vec![
        Election {
            code: "PRES2024".to_string(),
            title: "Presidential Election 2024".to_string(),
            kind: "Presidential Election".to_string(),
            description: None,
            scheduled_for: date(2024, 3, 15),
            state: ElectionState::Completed,
            ballot: vec![
                entry_with_experience(
                    "John Smith",
                    "Democratic Party",
                    "15 years in public service",
                    523,
                ),
                entry_with_experience(
                    "Sarah Johnson",
                    "Republican Party",
                    "12 years in business leadership",
                    456,
                ),
                entry_with_experience(
                    "Mike Brown",
                    "Independent",
                    "8 years in community organizing",
                    187,
                ),
                entry_with_experience(
                    "Lisa Davis",
                    "Green Party",
                    "10 years in environmental advocacy",
                    81,
                ),
            ],
        },
        Election {
            code: "SEN2024".to_string(),
            title: "Senate Election 2024".to_string(),
            kind: "Senate Election".to_string(),
            description: None,
            scheduled_for: date(2024, 2, 20),
            state: ElectionState::Completed,
            ballot: vec![
                entry("Robert Wilson", "Republican Party", 445),
                entry("Emily Chen", "Democratic Party", 389),
                entry("David Martinez", "Independent", 58),
            ],
        },
        Election {
            code: "GOV2024".to_string(),
            title: "Governor Election 2024".to_string(),
            kind: "Governor Election".to_string(),
            description: Some("Elect the next Governor for the state".to_string()),
            scheduled_for: date(2024, 4, 15),
            state: ElectionState::Ongoing,
            ballot: vec![
                entry("Maria Rodriguez", "Democratic Party", 387),
                entry("James Thompson", "Republican Party", 289),
                entry("Ann Parker", "Independent", 80),
            ],
        },
        Election {
            code: "MAYOR2024".to_string(),
            title: "Mayor Election 2024".to_string(),
            kind: "Mayor Election".to_string(),
            description: Some("Choose the next Mayor for the city".to_string()),
            scheduled_for: date(2024, 5, 20),
            state: ElectionState::Registration,
            ballot: Vec::new(),
        },
        Election {
            code: "SENATE2024".to_string(),
            title: "Senate Election 2024".to_string(),
            kind: "Senate Election".to_string(),
            description: Some("Select representatives for the Senate".to_string()),
            scheduled_for: date(2024, 6, 10),
            state: ElectionState::Upcoming,
            ballot: Vec::new(),
        },
    ]
}

fn entry(name: &str, party: &str, votes: u32) -> BallotEntry {
    BallotEntry {
        name: name.to_string(),
        party: Some(party.to_string()),
        experience: None,
        votes,
    }
}

fn entry_with_experience(name: &str, party: &str, experience: &str, votes: u32) -> BallotEntry {
    BallotEntry {
        experience: Some(experience.to_string()),
        ..entry(name, party, votes)
    }
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("hardcoded timestamps are valid")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("hardcoded dates are valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_match_the_review_screen() {
        let requests = candidacy_requests();

        assert_eq!(requests.len(), 3);
        assert_eq!(
            requests
                .iter()
                .filter(|request| request.status == RequestStatus::Pending)
                .count(),
            2
        );
        assert_eq!(requests[2].full_name, "Sarah Williams");
        assert_eq!(requests[2].status, RequestStatus::Approved);
        // Ids are unique and in submission order.
        assert_eq!(
            requests.iter().map(|request| request.id).collect::<Vec<_>>(),
            [1, 2, 3]
        );
    }

    #[test]
    fn election_tallies_match_the_results_screen() {
        let elections = elections();

        let totals: Vec<_> = elections
            .iter()
            .map(|election| (election.code.as_str(), election.total_votes()))
            .collect();
        assert_eq!(
            totals,
            [
                ("PRES2024", 1247),
                ("SEN2024", 892),
                ("GOV2024", 756),
                ("MAYOR2024", 0),
                ("SENATE2024", 0),
            ]
        );

        // Only GOV2024 is mid-vote.
        let ongoing: Vec<_> = elections
            .iter()
            .filter(|election| election.state == ElectionState::Ongoing)
            .map(|election| election.code.as_str())
            .collect();
        assert_eq!(ongoing, ["GOV2024"]);
    }
}
