use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryOrder, Set};

use crate::{contact, phone};
use super::setup_test_db;

async fn insert_contact(db: &sea_orm::DatabaseConnection, name: &str, group: Option<&str>) -> Result<contact::Model> {
    let am = contact::ActiveModel {
        name: Set(name.to_string()),
        email: Set(None),
        address: Set(None),
        birth_date: Set(None),
        group: Set(contact::normalize_group(group)),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

#[tokio::test]
async fn test_contact_with_phones_roundtrip() -> Result<()> {
    let db = setup_test_db().await?;
    let c = insert_contact(&db, "Ada", Some("work")).await?;
    phone::insert_all(&db, c.id, &["100".to_string(), "200".to_string()]).await?;

    let found = contact::Entity::find_by_id(c.id).one(&db).await?.expect("contact");
    assert_eq!(found.name, "Ada");
    assert_eq!(found.group, "work");

    let phones = found
        .find_related(phone::Entity)
        .order_by_asc(phone::Column::Id)
        .all(&db)
        .await?;
    let numbers: Vec<_> = phones.into_iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec!["100", "200"]);
    Ok(())
}

#[tokio::test]
async fn test_replace_phones() -> Result<()> {
    let db = setup_test_db().await?;
    let c = insert_contact(&db, "Bob", None).await?;
    phone::insert_all(&db, c.id, &["1".to_string(), "2".to_string()]).await?;
    phone::replace_for_contact(&db, c.id, &["3".to_string()]).await?;

    let phones = c.find_related(phone::Entity).all(&db).await?;
    assert_eq!(phones.len(), 1);
    assert_eq!(phones[0].number, "3");
    Ok(())
}

#[tokio::test]
async fn test_delete_contact_cascades_to_phones() -> Result<()> {
    let db = setup_test_db().await?;
    let c = insert_contact(&db, "Cleo", None).await?;
    phone::insert_all(&db, c.id, &["9".to_string()]).await?;
    let other = insert_contact(&db, "Dan", None).await?;
    phone::insert_all(&db, other.id, &["8".to_string()]).await?;

    contact::Entity::delete_by_id(c.id).exec(&db).await?;

    assert_eq!(phone::Entity::find().count(&db).await?, 1);
    let left = phone::Entity::find().one(&db).await?.expect("remaining phone");
    assert_eq!(left.contact_id, other.id);
    Ok(())
}

#[tokio::test]
async fn test_phone_requires_existing_contact() -> Result<()> {
    let db = setup_test_db().await?;
    let res = phone::insert_all(&db, 4242, &["555".to_string()]).await;
    assert!(res.is_err());
    Ok(())
}

#[tokio::test]
async fn test_default_group_column() -> Result<()> {
    let db = setup_test_db().await?;
    let c = insert_contact(&db, "Eve", Some("")).await?;
    assert_eq!(c.group, contact::DEFAULT_GROUP);
    let c = insert_contact(&db, "Fay", Some(" ")).await?;
    assert_eq!(c.group, " ");
    Ok(())
}

#[test]
fn test_validators() {
    assert!(contact::validate_name("Ann").is_ok());
    assert!(contact::validate_name("").is_err());
    assert!(contact::validate_name("  ").is_ok());
    assert!(phone::validate_number("123").is_ok());
    assert!(phone::validate_number("").is_err());
    assert!(phone::validate_number(" ").is_ok());
}
