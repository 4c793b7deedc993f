//! Seed catalog used by the API server and tests.

use chrono::NaiveDate;

use super::{Actor, ActorFacets, Agency, CastingCall, Catalog, Studio, SubjectRef, UsagePolicy};
use crate::facets::{Accent, AgeRange, Clearance, Gender, Geography, UseCase};
use crate::messaging::{Inbox, Participant};
use crate::types::Timestamp;

fn policy(use_cases: &[UseCase], territories: &[Geography], durations: &[&str]) -> UsagePolicy {
    UsagePolicy {
        use_cases: use_cases.to_vec(),
        territories: territories.to_vec(),
        durations: durations.iter().map(|d| d.to_string()).collect(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn actor(
    id: i64,
    name: &str,
    specialty: &str,
    bio: &str,
    skills: &[&str],
    location: &str,
    rating: f32,
    rate_range: &str,
    verified: bool,
    facets: ActorFacets,
) -> Actor {
    let policy = policy(
        &facets.permitted_uses,
        &[facets.geography, Geography::Worldwide],
        &["3 months", "6 months", "1 year"],
    );
    Actor {
        id,
        name: name.into(),
        specialty: specialty.into(),
        bio: bio.into(),
        skills: strings(skills),
        location: location.into(),
        rating,
        rate_range: rate_range.into(),
        verified,
        facets,
        policy,
    }
}

/// Build the seed catalog.
pub fn seed() -> Catalog {
    use UseCase::*;

    let actors = vec![
        actor(
            1,
            "Maya Chen",
            "Voice Acting",
            "Award-winning voice actor with a decade of animation and game credits.",
            &["Voice Acting", "Animation", "Mandarin"],
            "Los Angeles, CA",
            4.9,
            "$2,000 - $5,000 / day",
            true,
            ActorFacets {
                clearance: Clearance::PreCleared,
                age_range: AgeRange::From26To35,
                gender: Gender::Female,
                accent: Accent::American,
                geography: Geography::NorthAmerica,
                permitted_uses: vec![Animation, Gaming, Dubbing, Commercial],
            },
        ),
        actor(
            2,
            "James Whitaker",
            "Dramatic Film",
            "Classically trained stage and screen actor.",
            &["Stage Combat", "Shakespeare", "Horse Riding"],
            "London, UK",
            4.7,
            "$4,000 - $9,000 / day",
            true,
            ActorFacets {
                clearance: Clearance::Conditional,
                age_range: AgeRange::From36To50,
                gender: Gender::Male,
                accent: Accent::British,
                geography: Geography::Europe,
                permitted_uses: vec![Film, Television],
            },
        ),
        actor(
            3,
            "Sofia Reyes",
            "Motion Capture",
            "Performance capture specialist for AAA games and features.",
            &["Motion Capture", "Dance", "Stunts"],
            "Mexico City, MX",
            4.6,
            "$1,500 - $3,500 / day",
            true,
            ActorFacets {
                clearance: Clearance::PreCleared,
                age_range: AgeRange::From18To25,
                gender: Gender::Female,
                accent: Accent::Neutral,
                geography: Geography::LatinAmerica,
                permitted_uses: vec![Gaming, Film, Commercial],
            },
        ),
        actor(
            4,
            "Liam O'Connor",
            "Comedy",
            "Improv-first comedic performer, sketch and sitcom regular.",
            &["Improv", "Physical Comedy", "Voice Acting"],
            "Dublin, IE",
            4.3,
            "$1,200 - $2,800 / day",
            false,
            ActorFacets {
                clearance: Clearance::PreCleared,
                age_range: AgeRange::From26To35,
                gender: Gender::Male,
                accent: Accent::Irish,
                geography: Geography::Europe,
                permitted_uses: vec![Television, Commercial],
            },
        ),
        actor(
            5,
            "Aiko Tanaka",
            "Dubbing",
            "Bilingual dubbing artist and singer.",
            &["Japanese", "English", "Singing"],
            "Tokyo, JP",
            4.8,
            "$1,800 - $4,000 / day",
            true,
            ActorFacets {
                clearance: Clearance::Conditional,
                age_range: AgeRange::From26To35,
                gender: Gender::Female,
                accent: Accent::Neutral,
                geography: Geography::AsiaPacific,
                permitted_uses: vec![Dubbing, Animation],
            },
        ),
        actor(
            6,
            "Noah Campbell",
            "Narration",
            "Documentary narrator with a warm baritone.",
            &["Audiobooks", "Documentary", "Baritone"],
            "Edinburgh, UK",
            4.4,
            "$900 - $2,000 / day",
            true,
            ActorFacets {
                clearance: Clearance::Restricted,
                age_range: AgeRange::Over50,
                gender: Gender::Male,
                accent: Accent::Scottish,
                geography: Geography::Europe,
                permitted_uses: vec![Film],
            },
        ),
        actor(
            7,
            "Ava Mitchell",
            "Commercial Spokesperson",
            "On-camera host and spokesperson for national campaigns.",
            &["Teleprompter", "Hosting", "Voice Acting"],
            "Sydney, AU",
            4.1,
            "$800 - $1,800 / day",
            false,
            ActorFacets {
                clearance: Clearance::PreCleared,
                age_range: AgeRange::From18To25,
                gender: Gender::Female,
                accent: Accent::Australian,
                geography: Geography::AsiaPacific,
                permitted_uses: vec![Commercial, Television],
            },
        ),
        actor(
            8,
            "River Hale",
            "Character Acting",
            "Transformative character actor comfortable under heavy prosthetics.",
            &["Prosthetics", "Accents", "Motion Capture"],
            "Toronto, CA",
            4.5,
            "$2,500 - $6,000 / day",
            true,
            ActorFacets {
                clearance: Clearance::Conditional,
                age_range: AgeRange::From36To50,
                gender: Gender::NonBinary,
                accent: Accent::American,
                geography: Geography::NorthAmerica,
                permitted_uses: vec![Film, Gaming, Television],
            },
        ),
    ];

    let studios = vec![
        Studio {
            id: 101,
            name: "Northlight Pictures".into(),
            description: "Independent feature film studio focused on character dramas.".into(),
            location: "Los Angeles, CA".into(),
            studio_type: "Film Studio".into(),
            project_count: 42,
            verified: true,
            policy: policy(
                &[Film, Television],
                &[Geography::NorthAmerica, Geography::Worldwide],
                &["6 months", "1 year", "2 years"],
            ),
        },
        Studio {
            id: 102,
            name: "Pixelforge Games".into(),
            description: "AAA game developer with an in-house performance capture stage.".into(),
            location: "Montreal, QC".into(),
            studio_type: "Game Studio".into(),
            project_count: 17,
            verified: true,
            policy: policy(
                &[Gaming],
                &[Geography::NorthAmerica, Geography::Europe, Geography::Worldwide],
                &["1 year", "2 years"],
            ),
        },
        Studio {
            id: 103,
            name: "Bluewave Animation".into(),
            description: "Animated series and feature production house.".into(),
            location: "Tokyo, JP".into(),
            studio_type: "Animation Studio".into(),
            project_count: 63,
            verified: false,
            policy: policy(
                &[Animation, Dubbing],
                &[Geography::AsiaPacific, Geography::Worldwide],
                &["6 months", "1 year"],
            ),
        },
        Studio {
            id: 104,
            name: "Harbor Lane Commercials".into(),
            description: "Advertising production for broadcast and social campaigns.".into(),
            location: "London, UK".into(),
            studio_type: "Advertising".into(),
            project_count: 210,
            verified: true,
            policy: policy(
                &[Commercial],
                &[Geography::Europe],
                &["3 months", "6 months"],
            ),
        },
    ];

    let agencies = vec![
        Agency {
            id: 201,
            name: "Meridian Talent".into(),
            description: "Full-service representation for film and television actors.".into(),
            location: "Los Angeles, CA".into(),
            specialties: strings(&["Film", "Television"]),
            roster_size: 85,
            verified: true,
            policy: policy(
                &[Film, Television, Commercial],
                &[Geography::NorthAmerica, Geography::Worldwide],
                &["6 months", "1 year"],
            ),
        },
        Agency {
            id: 202,
            name: "Voiceworks Collective".into(),
            description: "Boutique agency for voice, dubbing and audiobook talent.".into(),
            location: "London, UK".into(),
            specialties: strings(&["Voice", "Dubbing", "Audiobooks"]),
            roster_size: 40,
            verified: true,
            policy: policy(
                &[Dubbing, Animation, Gaming],
                &[Geography::Europe, Geography::Worldwide],
                &["3 months", "6 months", "1 year"],
            ),
        },
        Agency {
            id: 203,
            name: "Apex Motion Agency".into(),
            description: "Motion capture and stunt performers.".into(),
            location: "Vancouver, BC".into(),
            specialties: strings(&["Motion Capture", "Stunts"]),
            roster_size: 28,
            verified: false,
            policy: policy(
                &[Gaming, Film],
                &[Geography::NorthAmerica],
                &["1 year"],
            ),
        },
    ];

    let casting_calls = vec![
        CastingCall {
            id: 301,
            title: "Lead voice for fantasy RPG".into(),
            studio: "Pixelforge Games".into(),
            role: "Protagonist (voice + mocap)".into(),
            description: "Seeking a versatile performer for a 60-hour narrative RPG.".into(),
            requirements: strings(&[
                "Motion capture experience",
                "Available for 12 weeks of sessions",
                "Comfortable with combat choreography",
            ]),
            budget: "$80,000 - $120,000".into(),
            deadline: date(2026, 12, 15),
            applied: false,
        },
        CastingCall {
            id: 302,
            title: "Narrator for nature documentary".into(),
            studio: "Northlight Pictures".into(),
            role: "Narrator".into(),
            description: "Six-part documentary series on coastal ecosystems.".into(),
            requirements: strings(&["Warm, authoritative voice", "Prior narration credits"]),
            budget: "$25,000".into(),
            deadline: date(2026, 11, 30),
            applied: false,
        },
        CastingCall {
            id: 303,
            title: "Animated series supporting cast".into(),
            studio: "Bluewave Animation".into(),
            role: "Comic relief sidekick".into(),
            description: "Recurring role in a 26-episode animated series.".into(),
            requirements: strings(&["Comedic timing", "Range of character voices"]),
            budget: "$1,500 / episode".into(),
            deadline: date(2027, 1, 20),
            applied: false,
        },
        CastingCall {
            id: 304,
            title: "National campaign spokesperson".into(),
            studio: "Harbor Lane Commercials".into(),
            role: "On-camera host".into(),
            description: "Face of a year-long broadcast and social campaign.".into(),
            requirements: strings(&["On-camera hosting", "Teleprompter fluency"]),
            budget: "$40,000".into(),
            deadline: date(2026, 12, 1),
            applied: false,
        },
        CastingCall {
            id: 305,
            title: "Period drama antagonist".into(),
            studio: "Northlight Pictures".into(),
            role: "Lord Ashcombe".into(),
            description: "Feature film set in 1840s England.".into(),
            requirements: strings(&["British accent", "Horse riding", "Stage combat"]),
            budget: "$150,000".into(),
            deadline: date(2027, 2, 28),
            applied: false,
        },
    ];

    Catalog {
        actors,
        studios,
        agencies,
        casting_calls,
    }
}

/// Opening messages of the seed inbox, one conversation per subject.
const SEED_CONVERSATIONS: &[(SubjectRef, &str)] = &[
    (
        SubjectRef::studio(102),
        "Loved your demo reel. Are you free for a session next week?",
    ),
    (
        SubjectRef::agency(201),
        "We have two new campaign briefs that could fit your profile.",
    ),
    (
        SubjectRef::actor(5),
        "Thanks for the intro! Happy to talk about the dub schedule.",
    ),
];

/// Build the seed inbox against `catalog`. Subjects missing from the
/// catalog are skipped.
pub fn seed_inbox(catalog: &Catalog, now: Timestamp) -> Inbox {
    let mut inbox = Inbox::new();
    for (subject, opening) in SEED_CONVERSATIONS {
        let Ok(name) = catalog.subject_name(*subject) else {
            continue;
        };
        let participant = Participant {
            subject: *subject,
            name: name.to_string(),
        };
        let (id, _) = inbox.start_conversation(participant, now);
        let _ = inbox.receive(id, opening, now);
    }
    inbox
}
