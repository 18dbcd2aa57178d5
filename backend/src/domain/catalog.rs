//! Seed catalog data for tours, transfer/taxi services, and hotels.
//!
//! The concierge product ships with a hotel-curated catalog; there is no
//! management UI for it, so the records are constructed here at service
//! startup. IDs are stable slugs so clients can bookmark them across
//! restarts.

use chrono::NaiveTime;
use shared::{
    Hotel, Place, Service, ServiceCategory, Tour, TourCategory, TourProgramItem, TourSchedule,
    TourSession, VehicleType, Weekday,
};

fn time(h: u32, m: u32) -> NaiveTime {
    // Hour/minute literals below are all valid
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn seed_tours() -> Vec<Tour> {
    vec![
        Tour {
            id: "footsteps-of-the-sultan".to_string(),
            title: "In The Footsteps of the Sultan".to_string(),
            price_per_person: 80.0,
            rating: 4.9,
            duration: "6.5 Hours".to_string(),
            description: "Embark on a fascinating journey through the legacy of the Ottoman \
                          Sultans! From grand palaces to majestic mosques, experience the \
                          splendor of the Ottoman Empire in its most iconic locations."
                .to_string(),
            category: TourCategory::Historical,
            program: vec![
                TourProgramItem {
                    title: "Topkapi Palace".to_string(),
                    description: "Explore the grandeur of the Ottoman Empire and its historical \
                                  treasures"
                        .to_string(),
                    location: Place {
                        name: "Topkapi Palace".to_string(),
                        latitude: 41.0115,
                        longitude: 28.9833,
                        description: "The former imperial palace of the Ottoman Sultans"
                            .to_string(),
                    },
                },
                TourProgramItem {
                    title: "Blue Mosque".to_string(),
                    description: "Experience the architectural splendor of the 17th-century \
                                  Sultan Ahmed Mosque"
                        .to_string(),
                    location: Place {
                        name: "Blue Mosque".to_string(),
                        latitude: 41.0055,
                        longitude: 28.9774,
                        description: "An iconic symbol of Istanbul with six towering minarets"
                            .to_string(),
                    },
                },
                TourProgramItem {
                    title: "Hippodrome of Constantinople".to_string(),
                    description: "Explore the historic arena that was once the social center of \
                                  Byzantine Constantinople"
                        .to_string(),
                    location: Place {
                        name: "Hippodrome of Constantinople".to_string(),
                        latitude: 41.0064,
                        longitude: 28.9758,
                        description: "Ancient chariot-racing stadium, now Sultanahmet Square"
                            .to_string(),
                    },
                },
            ],
            schedule: Some(TourSchedule {
                available_days: vec![
                    Weekday::Monday,
                    Weekday::Wednesday,
                    Weekday::Thursday,
                    Weekday::Friday,
                    Weekday::Saturday,
                    Weekday::Sunday,
                ],
                sessions: vec![TourSession {
                    id: "footsteps-morning".to_string(),
                    start_time: time(9, 30),
                    end_time: time(14, 0),
                    title: Some("Morning Tour".to_string()),
                }],
                notes: Some("Last entry 1 hour before closing".to_string()),
            }),
            meeting_point: Some("Hotel Lobby".to_string()),
            included_services: vec![
                "Transportation".to_string(),
                "Professional guide".to_string(),
                "Entrance fees".to_string(),
                "Water".to_string(),
            ],
            excluded_services: vec![
                "Lunch".to_string(),
                "Personal expenses".to_string(),
                "Optional activities".to_string(),
            ],
            visiting_places: vec![],
        },
        Tour {
            id: "turkish-hamam".to_string(),
            title: "Turkish Hamam Tour".to_string(),
            price_per_person: 40.0,
            rating: 4.5,
            duration: "3 Hours".to_string(),
            description: "Immerse yourself in the traditional Turkish bath experience, a \
                          centuries-old ritual of relaxation and rejuvenation."
                .to_string(),
            category: TourCategory::Cultural,
            program: vec![],
            schedule: Some(TourSchedule {
                available_days: vec![
                    Weekday::Monday,
                    Weekday::Wednesday,
                    Weekday::Friday,
                    Weekday::Saturday,
                    Weekday::Sunday,
                ],
                sessions: vec![
                    TourSession {
                        id: "hamam-morning".to_string(),
                        start_time: time(10, 0),
                        end_time: time(13, 0),
                        title: Some("Morning Session".to_string()),
                    },
                    TourSession {
                        id: "hamam-afternoon".to_string(),
                        start_time: time(14, 0),
                        end_time: time(17, 0),
                        title: Some("Afternoon Session".to_string()),
                    },
                    TourSession {
                        id: "hamam-evening".to_string(),
                        start_time: time(18, 0),
                        end_time: time(21, 0),
                        title: Some("Evening Session".to_string()),
                    },
                ],
                notes: Some("Last entry 2 hours before closing".to_string()),
            }),
            meeting_point: Some("Hamam Entrance".to_string()),
            included_services: vec![
                "Traditional bath service".to_string(),
                "Towels and toiletries".to_string(),
                "Locker usage".to_string(),
                "Tea service".to_string(),
            ],
            excluded_services: vec![
                "Extra massage services".to_string(),
                "Private room".to_string(),
                "Transportation".to_string(),
            ],
            visiting_places: vec![Place {
                name: "Historical Hamam".to_string(),
                latitude: 41.0082,
                longitude: 28.9784,
                description: "Traditional Turkish bath".to_string(),
            }],
        },
        Tour {
            id: "horizon-retreat".to_string(),
            title: "The Horizon Retreat".to_string(),
            price_per_person: 100.0,
            rating: 4.5,
            duration: "3 Hours".to_string(),
            description: "Experience luxury and comfort with our VIP retreat service. Perfect \
                          for those seeking an exclusive and memorable journey."
                .to_string(),
            category: TourCategory::Popular,
            program: vec![
                TourProgramItem {
                    title: "Dolmabahce Palace".to_string(),
                    description: "Visit the magnificent palace, home to Ottoman sultans"
                        .to_string(),
                    location: Place {
                        name: "Dolmabahce Palace".to_string(),
                        latitude: 41.0392,
                        longitude: 29.0007,
                        description: "Ottoman palace with stunning architecture".to_string(),
                    },
                },
                TourProgramItem {
                    title: "Camlica Hill".to_string(),
                    description: "Lunch with breathtaking 360-degree views of the city and \
                                  Bosphorus"
                        .to_string(),
                    location: Place {
                        name: "Camlica Hill".to_string(),
                        latitude: 41.0278,
                        longitude: 29.0717,
                        description: "The highest point in Istanbul".to_string(),
                    },
                },
            ],
            schedule: Some(TourSchedule {
                available_days: vec![Weekday::Tuesday, Weekday::Thursday, Weekday::Saturday],
                sessions: vec![TourSession {
                    id: "horizon-afternoon".to_string(),
                    start_time: time(13, 0),
                    end_time: time(16, 0),
                    title: None,
                }],
                notes: None,
            }),
            meeting_point: Some("Hotel Lobby".to_string()),
            included_services: vec![
                "VIP vehicle".to_string(),
                "Professional guide".to_string(),
                "Lunch".to_string(),
            ],
            excluded_services: vec!["Personal expenses".to_string()],
            visiting_places: vec![],
        },
    ]
}

pub fn seed_services() -> Vec<Service> {
    vec![
        Service {
            id: "vip-airport-transfer".to_string(),
            name: "VIP Airport Transfer".to_string(),
            location: "Istanbul".to_string(),
            price: 50.0,
            rating: 4.8,
            category: ServiceCategory::Transfer,
            vehicle_type: VehicleType::Vip,
            max_passengers: 4,
            features: vec![
                "Meet & Greet".to_string(),
                "Flight Tracking".to_string(),
                "Free Waiting Time".to_string(),
            ],
        },
        Service {
            id: "airport-taxi".to_string(),
            name: "Airport Taxi".to_string(),
            location: "Istanbul".to_string(),
            price: 30.0,
            rating: 4.5,
            category: ServiceCategory::Taxi,
            vehicle_type: VehicleType::Airport,
            max_passengers: 4,
            features: vec![
                "Metered Price".to_string(),
                "Flight Tracking".to_string(),
                "24/7 Service".to_string(),
            ],
        },
        Service {
            id: "city-taxi".to_string(),
            name: "City Taxi".to_string(),
            location: "Istanbul".to_string(),
            price: 20.0,
            rating: 4.3,
            category: ServiceCategory::Taxi,
            vehicle_type: VehicleType::Standard,
            max_passengers: 4,
            features: vec![
                "Metered Price".to_string(),
                "Local Driver".to_string(),
                "24/7 Service".to_string(),
            ],
        },
    ]
}

pub fn seed_hotels() -> Vec<Hotel> {
    vec![
        Hotel {
            id: "sayeban-gold".to_string(),
            name: "Sayeban Gold Hotel".to_string(),
        },
        Hotel {
            id: "dream-hotel".to_string(),
            name: "Dream Hotel".to_string(),
        },
        Hotel {
            id: "erk-hotel".to_string(),
            name: "Erk Hotel".to_string(),
        },
    ]
}
