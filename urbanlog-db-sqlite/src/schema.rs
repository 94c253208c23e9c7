table! {
    users (id) {
        id -> Text,
        email -> Text,
        created_at -> BigInt,
    }
}

table! {
    user_tokens (email) {
        email -> Text,
        nonce -> Text,
        expires_at -> BigInt,
    }
}

table! {
    requests (id) {
        id -> Text,
        created_by -> Text,
        lat -> Double,
        lng -> Double,
        category -> Text,
        subcategory -> Text,
        urgency -> Text,
        notes -> Text,
        created_at -> BigInt,
    }
}

table! {
    votes (id) {
        id -> Text,
        request_id -> Text,
        user_id -> Text,
        vote_type -> Text,
    }
}

joinable!(votes -> requests (request_id));

allow_tables_to_appear_in_same_query!(users, user_tokens, requests, votes);
