//! Command executors for each /region subcommand.

use crate::commands::CommandSource;
use crate::error::RegionError;
use crate::handlers::RegionGuard;
use crate::region::Region;

/// Chat line for a recoverable command failure.
fn describe(err: &RegionError) -> String {
    match err {
        RegionError::DuplicateName(_) => "A region with that name already exists!".to_string(),
        RegionError::OverlapConflict(_) => {
            "This area overlaps with an existing region! Please choose a different area."
                .to_string()
        }
        RegionError::NotFound(name) => format!("Region '{name}' not found!"),
        RegionError::PermissionDenied => "You don't own this region!".to_string(),
        RegionError::IncompleteSelection => {
            "You need to select an area first with the region wand!".to_string()
        }
        other => other.to_string(),
    }
}

/// Snapshot after a successful mutation. A failed write is logged and not
/// retried; the command still reports success.
async fn persist(guard: &RegionGuard) {
    if let Err(err) = guard.save().await {
        log::error!("regionguard: failed to save regions: {err}");
    }
}

pub(super) fn wand(guard: &RegionGuard) -> Vec<String> {
    vec![
        format!("Mark the area with the region wand ({}).", guard.config.wand.item),
        "Left-click: Set first position".to_string(),
        "Right-click: Set second position".to_string(),
        "Use /region create <name> after selection".to_string(),
    ]
}

pub(super) async fn create(guard: &RegionGuard, sender: &CommandSource, name: &str) -> Vec<String> {
    // Checked in the order the failures are reported: duplicate name first,
    // then missing selection, then overlap (inside insert).
    let result = {
        let mut regions = guard.regions.write().await;
        let selections = guard.selections.read().await;
        if regions.get(name).is_some() {
            Err(RegionError::DuplicateName(name.to_string()))
        } else {
            match selections.completed(&sender.name) {
                None => Err(RegionError::IncompleteSelection),
                Some((world, bounds)) => {
                    regions.insert(Region::new(name, sender.name.as_str(), world, bounds))
                }
            }
        }
    };

    match result {
        Ok(()) => {
            guard.selections.write().await.clear(&sender.name);
            persist(guard).await;
            vec![format!("Region '{name}' created successfully!")]
        }
        Err(err) => vec![describe(&err)],
    }
}

pub(super) async fn delete(guard: &RegionGuard, sender: &CommandSource, name: &str) -> Vec<String> {
    let result = {
        let mut regions = guard.regions.write().await;
        let allowed = match regions.get(name) {
            None => Err(RegionError::NotFound(name.to_string())),
            Some(region) if region.is_owner(&sender.name) || sender.privileged => Ok(()),
            Some(_) => Err(RegionError::PermissionDenied),
        };
        allowed.and_then(|()| regions.remove(name).map(|_| ()))
    };

    match result {
        Ok(()) => {
            persist(guard).await;
            vec![format!("Region '{name}' deleted successfully!")]
        }
        Err(err) => vec![describe(&err)],
    }
}

pub(super) async fn list(guard: &RegionGuard, sender: &CommandSource) -> Vec<String> {
    let regions = guard.regions.read().await;
    if regions.is_empty() {
        return vec!["No regions defined.".to_string()];
    }
    let mut entries: Vec<(String, bool)> = regions
        .iter()
        .map(|r| (r.name.clone(), r.is_owner(&sender.name)))
        .collect();
    entries.sort_unstable();

    let mut lines = vec!["=== Regions ===".to_string()];
    for (name, yours) in entries {
        if yours {
            lines.push(format!("- {name} (Yours)"));
        } else {
            lines.push(format!("- {name}"));
        }
    }
    lines
}

pub(super) async fn info(guard: &RegionGuard, name: &str) -> Vec<String> {
    let regions = guard.regions.read().await;
    let Some(region) = regions.get(name) else {
        return vec![describe(&RegionError::NotFound(name.to_string()))];
    };

    let mut members: Vec<String> = region.members.iter().cloned().collect();
    members.sort_unstable();
    let members_line = if members.is_empty() {
        "None".to_string()
    } else {
        members.join(", ")
    };

    vec![
        format!("=== Region Info: {name} ==="),
        format!("Owner: {}", region.owner),
        format!("World: {}", region.world),
        format!("Position 1: {}", region.bounds.pos1),
        format!("Position 2: {}", region.bounds.pos2),
        format!("Members: {members_line}"),
    ]
}

pub(super) async fn add_member(
    guard: &RegionGuard,
    sender: &CommandSource,
    region_name: &str,
    member: &str,
) -> Vec<String> {
    let result = {
        let mut regions = guard.regions.write().await;
        match regions.get_mut(region_name) {
            None => Err(RegionError::NotFound(region_name.to_string())),
            Some(region) if region.is_owner(&sender.name) || sender.privileged => {
                region.add_member(member);
                Ok(())
            }
            Some(_) => Err(RegionError::PermissionDenied),
        }
    };

    match result {
        Ok(()) => {
            persist(guard).await;
            vec![format!("Player '{member}' added to region '{region_name}'!")]
        }
        Err(err) => vec![describe(&err)],
    }
}

pub(super) async fn remove_member(
    guard: &RegionGuard,
    sender: &CommandSource,
    region_name: &str,
    member: &str,
) -> Vec<String> {
    let result = {
        let mut regions = guard.regions.write().await;
        match regions.get_mut(region_name) {
            None => Err(RegionError::NotFound(region_name.to_string())),
            Some(region) if region.is_owner(&sender.name) || sender.privileged => {
                region.remove_member(member);
                Ok(())
            }
            Some(_) => Err(RegionError::PermissionDenied),
        }
    };

    match result {
        Ok(()) => {
            persist(guard).await;
            vec![format!("Player '{member}' removed from region '{region_name}'!")]
        }
        Err(err) => vec![describe(&err)],
    }
}
