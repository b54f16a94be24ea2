// GraphQL documents sent to the tournament service.

/// Tournament slugs matching a region/game/date filter.
pub const TOURNAMENT_SLUGS_BY_STATE: &str = r#"
    query TournamentsByState(
        $perPage: Int
        $state: String!
        $videogameIds: [ID]
        $afterDate: Timestamp
        $beforeDate: Timestamp
        $past: Boolean
        $upcoming: Boolean
    ) {
        tournaments(query: {
            perPage: $perPage
            page: 1
            filter: {
                addrState: $state
                past: $past
                upcoming: $upcoming
                videogameIds: $videogameIds
                afterDate: $afterDate
                beforeDate: $beforeDate
            }
        }) {
            nodes {
                id
                slug
            }
        }
    }
"#;

/// Same filter as [`TOURNAMENT_SLUGS_BY_STATE`], returning display fields.
pub const TOURNAMENT_SUMMARIES_BY_STATE: &str = r#"
    query TournamentsByState(
        $perPage: Int
        $state: String!
        $videogameIds: [ID]
        $afterDate: Timestamp
        $beforeDate: Timestamp
        $past: Boolean
        $upcoming: Boolean
    ) {
        tournaments(query: {
            perPage: $perPage
            page: 1
            filter: {
                addrState: $state
                past: $past
                upcoming: $upcoming
                videogameIds: $videogameIds
                afterDate: $afterDate
                beforeDate: $beforeDate
            }
        }) {
            nodes {
                id
                name
                addrState
            }
        }
    }
"#;

pub const EVENT_BY_SLUG: &str = r#"
    query EventQuery($slug: String) {
        event(slug: $slug) {
            id
            name
        }
    }
"#;

pub const PARTICIPANTS_BY_TOURNAMENT: &str = r#"
    query PlayersAtEvent($tourneySlug: String, $perPage: Int) {
        tournament(slug: $tourneySlug) {
            id
            name
            participants(query: { perPage: $perPage, page: 1 }) {
                nodes {
                    id
                    gamerTag
                    prefix
                    user {
                        slug
                    }
                }
            }
        }
    }
"#;
