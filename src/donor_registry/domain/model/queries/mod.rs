pub mod search_donors_query;
