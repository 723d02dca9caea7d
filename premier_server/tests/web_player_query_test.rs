
use reqwest::StatusCode;

use premier_app::{
    repository::PlayerRepository,
    test_utils::tests::{PlayerFactoryOptions, seed_player, test_config},
};
use premier_types::{
    errors::ApplicationError,
    filter::FilterMode,
    player::Player,
    stats::PlayerStats,
};

use crate::test_utils::tests::{TestApp, setup_web_app, setup_web_app_with_config};

async fn seed(app: &TestApp, name: &str, nation: &str, position: &str, team: &str) -> Player {
    seed_player(
        &*app.provider.players(),
        PlayerFactoryOptions {
            name: Some(name),
            nation: Some(nation),
            position: Some(position),
            team: Some(team),
            ..Default::default()
        },
    )
    .await
}

async fn get_players(app: &TestApp, query: &[(&str, &str)]) -> Vec<Player> {
    let res = app
        .client
        .get(app.url("/api/v1/player"))
        .query(query)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

fn ids(players: &[Player]) -> Vec<i64> {
    players.iter().map(|p| p.id).collect()
}

#[tokio::test]
async fn test_team_and_position_filter() -> Result<(), ApplicationError> {
    let app = setup_web_app_with_config(test_config(FilterMode::Precedence)).await?;

    let forward = seed(&app, "Forward One", "eng ENG", "FW", "A").await;
    seed(&app, "Midfielder Two", "eng ENG", "MF", "A").await;

    let players = get_players(&app, &[("team", "A"), ("position", "FW")]).await;
    assert_eq!(players, vec![forward]);

    Ok(())
}

#[tokio::test]
async fn test_name_is_ignored_when_team_and_position_are_given() -> Result<(), ApplicationError> {
    let app = setup_web_app_with_config(test_config(FilterMode::Precedence)).await?;

    let saka = seed(&app, "Bukayo Saka", "eng ENG", "Forward", "Arsenal").await;
    let jesus = seed(&app, "Gabriel Jesus", "br BRA", "Forward", "Arsenal").await;
    seed(&app, "Bukayo Saka", "eng ENG", "Forward", "Chelsea").await;

    let players = get_players(
        &app,
        &[("team", "Arsenal"), ("position", "Forward"), ("name", "Saka")],
    )
    .await;
    assert_eq!(ids(&players), vec![saka.id, jesus.id]);

    Ok(())
}

#[tokio::test]
async fn test_substring_filters_and_unfiltered_list() -> Result<(), ApplicationError> {
    let app = setup_web_app_with_config(test_config(FilterMode::Precedence)).await?;

    let odegaard = seed(&app, "Martin Ødegaard", "no NOR", "MF", "Arsenal").await;
    let haaland = seed(&app, "Erling Haaland", "no NOR", "FW", "Manchester City").await;
    let palmer = seed(&app, "Cole Palmer", "eng ENG", "FW,MF", "Chelsea").await;

    let players = get_players(&app, &[("name", "ødeGAARD")]).await;
    assert_eq!(ids(&players), vec![odegaard.id]);

    let players = get_players(&app, &[("position", "fw")]).await;
    assert_eq!(ids(&players), vec![haaland.id, palmer.id]);

    let players = get_players(&app, &[("nation", "NOR")]).await;
    assert_eq!(ids(&players), vec![odegaard.id, haaland.id]);

    let players = get_players(&app, &[]).await;
    assert_eq!(ids(&players), vec![odegaard.id, haaland.id, palmer.id]);

    let players = get_players(&app, &[("name", "nobody")]).await;
    assert!(players.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_combined_filter_mode() -> Result<(), ApplicationError> {
    let app = setup_web_app_with_config(test_config(FilterMode::Combined)).await?;

    seed(&app, "Bukayo Saka", "eng ENG", "FW", "Arsenal").await;
    let rice = seed(&app, "Declan Rice", "eng ENG", "MF", "Arsenal").await;
    seed(&app, "Cole Palmer", "eng ENG", "FW,MF", "Chelsea").await;

    let players = get_players(&app, &[("team", "Arsenal"), ("name", "rice")]).await;
    assert_eq!(players, vec![rice]);

    Ok(())
}

#[tokio::test]
async fn test_get_player_by_id_and_name() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let player = seed(&app, "Alexander Isak", "se SWE", "FW", "Newcastle Utd").await;

    let res = app
        .client
        .get(app.url(&format!("/api/v1/player/{}", player.id)))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Player>().await.unwrap(), player);

    let res = app
        .client
        .get(app.url(&format!("/api/v1/player/{}", player.id + 1)))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app
        .client
        .get(app.url("/api/v1/player/name/Alexander%20Isak"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Player>().await.unwrap(), player);

    let res = app
        .client
        .get(app.url("/api/v1/player/name/Isak"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_player_stats() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;

    for (team, goals, assists) in [("Arsenal", 16, 9), ("Arsenal", 3, 12), ("Fulham", 7, 0)] {
        seed_player(
            &*app.provider.players(),
            PlayerFactoryOptions {
                team: Some(team),
                goals: Some(goals),
                assists: Some(assists),
                ..Default::default()
            },
        )
        .await;
    }

    let res = app
        .client
        .get(app.url("/api/v1/player/stats"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["totalPlayers"], 3);
    assert_eq!(body["playersByTeam"]["Arsenal"], 2);
    assert_eq!(body["topScorers"][0]["goals"], 16);
    assert_eq!(body["topAssists"][0]["assists"], 12);

    // the JSON carries the same numbers as the in-process summary
    let all = app.provider.players().find_all().await.unwrap();
    let expected = PlayerStats::from_players(&all);
    assert_eq!(body["totalPlayers"], expected.total_players);

    Ok(())
}

#[tokio::test]
async fn test_store_failure_is_500() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    app.provider.players().set_unavailable(true);

    let res = app
        .client
        .get(app.url("/api/v1/player"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
