// Table definitions for the relational backend. Entity rows plus the
// association tables that hold cross-entity id sets.

diesel::table! {
    categories (id) {
        id -> Varchar,
        name -> Varchar,
        description -> Nullable<Text>,
        is_validated -> Bool,
    }
}

diesel::table! {
    genres (id) {
        id -> Varchar,
        name -> Varchar,
        is_validated -> Bool,
    }
}

diesel::table! {
    cast_members (id) {
        id -> Varchar,
        name -> Varchar,
        kind -> Int4,
    }
}

diesel::table! {
    videos (id) {
        id -> Varchar,
        title -> Varchar,
        description -> Text,
        year_launched -> Int4,
        opened -> Bool,
        rating -> Int4,
        duration -> Int4,
        video_file -> Nullable<Varchar>,
    }
}

diesel::table! {
    category_genres (category_id, genre_id) {
        category_id -> Varchar,
        genre_id -> Varchar,
    }
}

diesel::table! {
    video_categories (video_id, category_id) {
        video_id -> Varchar,
        category_id -> Varchar,
    }
}

diesel::table! {
    video_genres (video_id, genre_id) {
        video_id -> Varchar,
        genre_id -> Varchar,
    }
}

diesel::joinable!(category_genres -> categories (category_id));
diesel::joinable!(category_genres -> genres (genre_id));
diesel::joinable!(video_categories -> videos (video_id));
diesel::joinable!(video_categories -> categories (category_id));
diesel::joinable!(video_genres -> videos (video_id));
diesel::joinable!(video_genres -> genres (genre_id));

diesel::allow_tables_to_appear_in_same_query!(
    categories,
    genres,
    cast_members,
    videos,
    category_genres,
    video_categories,
    video_genres,
);
