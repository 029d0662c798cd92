//! HTTP handlers and route configuration.

mod feed;
mod health;
mod likes;
mod media;
mod tweets;
mod videos;


use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed bodies and query strings answer in the envelope too.
    cfg.app_data(
        web::JsonConfig::default()
            .limit(256 * 1024 * 1024)
            .error_handler(|err, _req| AppError::validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::validation(err.to_string()).into()),
    );

    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/feed/{user_id}", web::get().to(feed::get_feed))
            // Tweets
            .service(
                web::scope("/tweets")
                    .route("", web::post().to(tweets::create_tweet))
                    .route("/user/{user_id}", web::get().to(tweets::get_user_tweets))
                    .route("/{tweet_id}", web::patch().to(tweets::update_tweet))
                    .route("/{tweet_id}", web::delete().to(tweets::delete_tweet)),
            )
            // Videos
            .service(
                web::scope("/videos")
                    .route("", web::get().to(videos::get_all_videos))
                    .route("", web::post().to(videos::publish_video))
                    .route("/user/{user_id}", web::get().to(videos::get_user_videos))
                    .route(
                        "/toggle/publish/{video_id}",
                        web::patch().to(videos::toggle_publish_status),
                    )
                    .route("/{video_id}", web::get().to(videos::get_video_by_id))
                    .route("/{video_id}", web::patch().to(videos::update_video))
                    .route("/{video_id}", web::delete().to(videos::delete_video)),
            )
            // Likes
            .route("/likes/{kind}/{target_id}", web::post().to(likes::like_content)),
    );
}
