use atelier_core::{GenerateRequest, Message};
use atelier_models::{ChatCompletionClient, UnsplashClient};
use std::env;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_chat_completion_simple_generation() {
    let api_key = env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set for API tests");

    let client = ChatCompletionClient::new(api_key, "gpt-3.5-turbo");

    let request = GenerateRequest::builder()
        .messages(vec![Message::user("Say 'test' and nothing else.")])
        .max_tokens(Some(20))
        .build()
        .expect("Valid request");

    let response = client.generate(&request).await.expect("API call succeeded");

    assert!(!response.text().is_empty());
    println!("Response: {:?}", response.text());
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_unsplash_landscape_search() {
    let access_key =
        env::var("UNSPLASH_ACCESS_KEY").expect("UNSPLASH_ACCESS_KEY must be set for API tests");

    let client = UnsplashClient::new(access_key);

    let response = client
        .search_photos("mountain sunrise")
        .await
        .expect("API call succeeded");

    assert!(response.first_regular_url().is_some());
    println!("First result: {:?}", response.first_regular_url());
}
